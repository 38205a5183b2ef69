//! Tag Mutation Engine - batch rename / merge / delete
//!
//! | old_names | new_name | 效果 |
//! |-----------|----------|------|
//! | [A, ...] | None | 删除 |
//! | [A] | Some(B) | 重命名 |
//! | [A, B, ...] | Some(C) | 合并 |
//!
//! Presets that reference none of the old names are never touched.

use std::collections::HashSet;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::serde_helpers::normalize_tag_name;
use shared::models::{GallerySettings, Preset};

use super::pin_registry::remove_pins;
use super::tag_index::{normalize_tag_names, register_custom_tag};

/// A validated batch retag request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retag {
    old_names: Vec<String>,
    new_name: Option<String>,
}

impl Retag {
    /// Validate and normalize a batch request
    ///
    /// Old names are trimmed like stored tag lists, blank entries dropped. `new_name` is trimmed and
    /// must not end up empty; use `None` to delete.
    pub fn new<S: AsRef<str>>(old_names: &[S], new_name: Option<&str>) -> AppResult<Self> {
        let new_name = match new_name {
            None => None,
            Some(raw) => match normalize_tag_name(raw) {
                Some(name) => Some(name.to_string()),
                None => {
                    return Err(AppError::validation("New tag name must not be empty")
                        .with_detail("field", "newName"));
                }
            },
        };

        let old_names = normalize_tag_names(old_names);
        if old_names.is_empty() {
            return Err(AppError::new(ErrorCode::TagListEmpty).with_detail("field", "oldNames"));
        }

        Ok(Self {
            old_names,
            new_name,
        })
    }

    pub fn old_names(&self) -> &[String] {
        &self.old_names
    }

    pub fn new_name(&self) -> Option<&str> {
        self.new_name.as_deref()
    }

    pub fn is_delete(&self) -> bool {
        self.new_name.is_none()
    }

    fn is_old(&self, name: &str) -> bool {
        self.old_names.iter().any(|o| o == name)
    }

    /// Rewritten category list, or `None` when the list does not change
    ///
    /// The first old name encountered is replaced by the new name in place;
    /// later old names are dropped and duplicates collapse.
    pub fn rewrite(&self, categories: &[String]) -> Option<Vec<String>> {
        if !categories.iter().any(|c| self.is_old(c)) {
            return None;
        }

        let mut emitted: HashSet<&str> = HashSet::new();
        let mut rewritten = Vec::with_capacity(categories.len());

        for name in categories {
            let target = if self.is_old(name) {
                match self.new_name.as_deref() {
                    Some(new_name) => new_name,
                    None => continue,
                }
            } else {
                name.as_str()
            };

            if emitted.insert(target) {
                rewritten.push(target.to_string());
            }
        }

        (rewritten.as_slice() != categories).then_some(rewritten)
    }

    /// Apply to every preset; returns the number of presets changed
    pub fn apply_to_presets(&self, presets: &mut [Preset]) -> usize {
        let mut updated = 0;
        for preset in presets.iter_mut() {
            if let Some(categories) = self.rewrite(&preset.categories) {
                preset.categories = categories;
                updated += 1;
            }
        }
        updated
    }

    /// Clean the pin and custom registries
    ///
    /// Old names leave both registries whether or not any preset used them.
    /// A new name that is itself one of the old names stays. A renamed custom
    /// tag keeps being registered under its new name.
    pub fn apply_to_settings(&self, settings: &mut GallerySettings) {
        let removed: Vec<String> = self
            .old_names
            .iter()
            .filter(|name| self.new_name.as_deref() != Some(name.as_str()))
            .cloned()
            .collect();

        let was_custom = settings.custom_tags.iter().any(|t| removed.contains(t));

        remove_pins(&mut settings.pinned_tags, &removed);
        settings.custom_tags.retain(|t| !removed.contains(t));

        if was_custom && let Some(new_name) = self.new_name.as_deref() {
            register_custom_tag(settings, new_name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tag_index::tests::preset;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rejects_empty_old_names() {
        let err = Retag::new::<&str>(&[], None).unwrap_err();
        assert_eq!(err.code, ErrorCode::TagListEmpty);

        let err = Retag::new(&["", "  "], Some("B")).unwrap_err();
        assert_eq!(err.code, ErrorCode::TagListEmpty);
    }

    #[test]
    fn test_rejects_blank_new_name() {
        let err = Retag::new(&["A"], Some("   ")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_delete() {
        let retag = Retag::new(&["A", "B"], None).unwrap();
        assert!(retag.is_delete());
        assert_eq!(retag.rewrite(&tags(&["A", "C", "B", "D"])), Some(tags(&["C", "D"])));
        assert_eq!(retag.rewrite(&tags(&["C", "D"])), None);
    }

    #[test]
    fn test_rename_in_place() {
        let retag = Retag::new(&["A"], Some(" B ")).unwrap();
        assert_eq!(retag.new_name(), Some("B"));
        assert_eq!(retag.rewrite(&tags(&["X", "A", "Y"])), Some(tags(&["X", "B", "Y"])));
    }

    #[test]
    fn test_rename_into_existing_tag_collapses() {
        let retag = Retag::new(&["A"], Some("B")).unwrap();
        assert_eq!(retag.rewrite(&tags(&["A", "B"])), Some(tags(&["B"])));
        assert_eq!(retag.rewrite(&tags(&["B", "A"])), Some(tags(&["B"])));
    }

    #[test]
    fn test_merge_inserts_once() {
        let retag = Retag::new(&["A", "B"], Some("C")).unwrap();
        assert_eq!(retag.rewrite(&tags(&["A", "X", "B"])), Some(tags(&["C", "X"])));
        assert_eq!(retag.rewrite(&tags(&["B"])), Some(tags(&["C"])));
    }

    #[test]
    fn test_self_rename_is_noop() {
        let retag = Retag::new(&["A"], Some("A")).unwrap();
        let mut presets = vec![preset("1", &["A", "B"], None), preset("2", &["C"], None)];
        let before = presets.clone();

        assert_eq!(retag.apply_to_presets(&mut presets), 0);
        assert_eq!(presets, before);

        let mut settings = GallerySettings {
            pinned_tags: tags(&["A"]),
            custom_tags: tags(&["A"]),
            ..Default::default()
        };
        retag.apply_to_settings(&mut settings);
        assert_eq!(settings.pinned_tags, vec!["A"]);
        assert_eq!(settings.custom_tags, vec!["A"]);
    }

    #[test]
    fn test_untouched_presets_keep_order() {
        let retag = Retag::new(&["A"], None).unwrap();
        let mut presets = vec![preset("1", &["Z", "Y", "Z"], None)];
        assert_eq!(retag.apply_to_presets(&mut presets), 0);
        assert_eq!(presets[0].categories, vec!["Z", "Y", "Z"]);
    }

    #[test]
    fn test_registries_cleaned_without_usage() {
        let retag = Retag::new(&["Ghost"], None).unwrap();
        let mut settings = GallerySettings {
            pinned_tags: tags(&["Ghost", "Keep"]),
            custom_tags: tags(&["Ghost"]),
            ..Default::default()
        };
        retag.apply_to_settings(&mut settings);
        assert_eq!(settings.pinned_tags, vec!["Keep"]);
        assert!(settings.custom_tags.is_empty());
    }

    #[test]
    fn test_renamed_custom_tag_stays_registered() {
        let retag = Retag::new(&["Draft"], Some("Final")).unwrap();
        let mut settings = GallerySettings {
            pinned_tags: tags(&["Draft"]),
            custom_tags: tags(&["Draft", "Other"]),
            ..Default::default()
        };
        retag.apply_to_settings(&mut settings);
        assert!(settings.pinned_tags.is_empty());
        assert_eq!(settings.custom_tags, vec!["Other", "Final"]);
    }

    #[test]
    fn test_merge_into_member_keeps_member() {
        let retag = Retag::new(&["A", "B"], Some("A")).unwrap();
        let mut settings = GallerySettings {
            pinned_tags: tags(&["A", "B"]),
            custom_tags: vec![],
            ..Default::default()
        };
        retag.apply_to_settings(&mut settings);
        assert_eq!(settings.pinned_tags, vec!["A"]);
    }
}
