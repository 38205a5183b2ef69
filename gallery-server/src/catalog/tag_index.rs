//! Tag Index - derived tag view
//!
//! Tags are a projection over the preset collection plus the custom tag
//! registry. Usage count = number of presets whose categories contain the
//! tag (a preset listing a tag twice counts once).

use std::collections::{BTreeMap, HashMap, HashSet};

use shared::models::serde_helpers::normalize_tag_name;
use shared::models::{GallerySettings, Preset, TagCount};

/// Usage counts in discovery order
pub fn usage_counts(presets: &[Preset]) -> Vec<TagCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TagCount> = Vec::new();

    for preset in presets {
        let mut seen: HashSet<&str> = HashSet::new();
        for name in &preset.categories {
            if name.is_empty() || !seen.insert(name.as_str()) {
                continue;
            }
            match index.get(name.as_str()) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(name.as_str(), counts.len());
                    counts.push(TagCount::new(name.clone(), 1));
                }
            }
        }
    }

    counts
}

/// All tags with counts, most used first
///
/// Custom tags without usage are appended with count 0. Ties keep discovery
/// order (presets first, then custom registry order).
pub fn list_tags(presets: &[Preset], custom_tags: &[String]) -> Vec<TagCount> {
    let mut tags = usage_counts(presets);

    let mut known: HashSet<String> = tags.iter().map(|t| t.name.clone()).collect();
    for name in custom_tags {
        if !name.is_empty() && known.insert(name.clone()) {
            tags.push(TagCount::new(name.clone(), 0));
        }
    }

    tags.sort_by(|a, b| b.count.cmp(&a.count));
    tags
}

/// Badge counts over the whole collection
///
/// Every main category is present, with 0 when unused.
pub fn category_counts(presets: &[Preset], main_categories: &[String]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = main_categories
        .iter()
        .map(|name| (name.clone(), 0))
        .collect();

    for tag in usage_counts(presets) {
        counts.insert(tag.name, tag.count);
    }

    counts
}

/// Trim, drop blank names and collapse duplicates, keeping first occurrence
///
/// Uses the same normalization as stored tag lists.
pub fn normalize_tag_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter_map(|n| normalize_tag_name(n.as_ref()))
        .filter(|n| seen.insert(*n))
        .map(str::to_string)
        .collect()
}

/// Register a custom tag; returns false when it was already registered
pub fn register_custom_tag(settings: &mut GallerySettings, name: &str) -> bool {
    if settings.custom_tags.iter().any(|t| t == name) {
        return false;
    }
    settings.custom_tags.push(name.to_string());
    true
}
