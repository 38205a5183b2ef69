//! Preset Query Engine - filter, sort, paginate
//!
//! ```text
//! presets ──▶ filter (category AND q) ──▶ sort ──▶ page?
//!                                                   │
//!                     category_counts (unfiltered) ◀┘
//! ```

use std::cmp::Reverse;

use shared::intent::{PresetPage, PresetQuery, PresetQueryResult, SortMode};
use shared::models::Preset;

use super::pin_registry::pin_rank;
use super::tag_index::category_counts;

/// Presets matching the query filters, in arrival order
pub fn filter_presets<'a>(presets: &'a [Preset], query: &PresetQuery) -> Vec<&'a Preset> {
    let category = query.category_filter();
    let needle = query.text_filter();

    presets
        .iter()
        .filter(|p| category.is_none_or(|c| p.has_category(c)))
        .filter(|p| needle.as_deref().is_none_or(|n| p.matches_text(n)))
        .collect()
}

/// Position of the preset's first category found in the main list
///
/// Presets without any main category rank after all others.
pub fn category_rank(preset: &Preset, main_categories: &[String]) -> usize {
    preset
        .categories
        .iter()
        .find_map(|c| main_categories.iter().position(|m| m == c))
        .unwrap_or(main_categories.len())
}

/// Sort in place; `None` keeps arrival order
///
/// All sorts are stable, so presets with equal keys keep arrival order.
pub fn sort_presets(
    presets: &mut [&Preset],
    sort: Option<SortMode>,
    pinned: &[String],
    main_categories: &[String],
) {
    match sort {
        None => {}
        Some(SortMode::Latest) => {
            presets.sort_by_cached_key(|p| Reverse(p.created_millis()));
        }
        Some(SortMode::PinnedFirst) => {
            presets.sort_by_cached_key(|p| {
                (
                    pin_rank(p, pinned).unwrap_or(usize::MAX),
                    Reverse(p.created_millis()),
                )
            });
        }
        Some(SortMode::Category) => {
            presets.sort_by_cached_key(|p| {
                (
                    category_rank(p, main_categories),
                    Reverse(p.created_millis()),
                )
            });
        }
    }
}

/// Slice of one page; a page past the end is empty
pub fn paginate<T>(items: Vec<T>, page: u32, page_size: u32) -> Vec<T> {
    let start = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
    items
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect()
}

/// Run a full query over the collection
///
/// Without valid paging parameters the whole sorted list is returned; with
/// them, a [`PresetPage`] carrying the filtered total and badge counts over
/// the unfiltered collection.
pub fn run_query(
    presets: &[Preset],
    query: &PresetQuery,
    pinned: &[String],
    main_categories: &[String],
) -> PresetQueryResult {
    let mut matched = filter_presets(presets, query);
    sort_presets(&mut matched, query.sort, pinned, main_categories);

    match query.pagination() {
        None => PresetQueryResult::List(matched.into_iter().cloned().collect()),
        Some((page, page_size)) => {
            let total = matched.len();
            let items = paginate(matched, page, page_size)
                .into_iter()
                .cloned()
                .collect();
            PresetQueryResult::Page(PresetPage::new(
                items,
                total,
                page,
                page_size,
                category_counts(presets, main_categories),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tag_index::tests::preset;

    fn ids(result: &PresetQueryResult) -> Vec<&str> {
        result.presets().iter().map(|p| p.id.as_str()).collect()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_sort_keeps_arrival_order() {
        let presets = vec![
            preset("1", &[], Some("2024-01-01")),
            preset("2", &[], Some("2024-03-01")),
            preset("3", &[], Some("2024-02-01")),
        ];
        let result = run_query(&presets, &PresetQuery::all(), &[], &[]);
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
        assert!(matches!(result, PresetQueryResult::List(_)));
    }

    #[test]
    fn test_latest() {
        let presets = vec![
            preset("1", &[], Some("2024-01-01")),
            preset("2", &[], Some("2024-03-01")),
            preset("1706745600000", &[], None),
        ];
        let query = PresetQuery::all().order_by(SortMode::Latest);
        assert_eq!(ids(&run_query(&presets, &query, &[], &[])), vec!["2", "1706745600000", "1"]);
    }

    #[test]
    fn test_filters_compose() {
        let mut a = preset("1", &["A"], None);
        a.title = "Red house".to_string();
        let mut b = preset("2", &["A"], None);
        b.title = "Blue house".to_string();
        let mut c = preset("3", &["B"], None);
        c.title = "Red car".to_string();
        let presets = vec![a, b, c];

        let query = PresetQuery::all().with_category("A").search("RED");
        assert_eq!(ids(&run_query(&presets, &query, &[], &[])), vec!["1"]);

        let query = PresetQuery::all().with_category("All").search("red");
        assert_eq!(ids(&run_query(&presets, &query, &[], &[])), vec!["1", "3"]);
    }

    #[test]
    fn test_pinned_first_groups_by_pin_order() {
        let presets = vec![
            preset("u-old", &["Z"], Some("2024-01-01")),
            preset("y", &["Y"], Some("2024-05-01")),
            preset("x-old", &["X"], Some("2024-02-01")),
            preset("xy", &["Y", "X"], Some("2024-03-01")),
            preset("u-new", &["Z"], Some("2024-06-01")),
        ];
        let pinned = names(&["X", "Y"]);
        let query = PresetQuery::all().order_by(SortMode::PinnedFirst);
        assert_eq!(
            ids(&run_query(&presets, &query, &pinned, &[])),
            vec!["xy", "x-old", "y", "u-new", "u-old"]
        );
    }

    #[test]
    fn test_category_sort() {
        let main = names(&["建筑设计", "室内设计"]);
        let presets = vec![
            preset("none", &["Other"], Some("2024-09-01")),
            preset("interior", &["室内设计"], Some("2024-08-01")),
            preset("arch-old", &["Other", "建筑设计"], Some("2024-01-01")),
            preset("arch-new", &["建筑设计"], Some("2024-02-01")),
        ];
        let query = PresetQuery::all().order_by(SortMode::Category);
        assert_eq!(
            ids(&run_query(&presets, &query, &[], &main)),
            vec!["arch-new", "arch-old", "interior", "none"]
        );
    }

    #[test]
    fn test_page_two() {
        let presets: Vec<Preset> = (0..15).map(|i| preset(&i.to_string(), &["A"], None)).collect();
        let query = PresetQuery::all().paginate(2, 10);
        let page = run_query(&presets, &query, &[], &[]).into_page().unwrap();
        assert_eq!(page.presets.len(), 5);
        assert_eq!(page.total, 15);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.presets[0].id, "10");
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let presets = vec![preset("1", &["A"], None)];
        let query = PresetQuery::all().paginate(5, 10);
        let page = run_query(&presets, &query, &[], &[]).into_page().unwrap();
        assert!(page.presets.is_empty());
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_category_counts_ignore_filter() {
        let presets = vec![preset("1", &["A"], None), preset("2", &["B"], None)];
        let query = PresetQuery::all().with_category("A").paginate(1, 10);
        let page = run_query(&presets, &query, &[], &[]).into_page().unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.category_counts.get("B"), Some(&1));
    }
}
