//! Gallery Settings Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::serde_helpers;

/// Settings document - pin registry and custom tag registry
///
/// Both lists keep insertion order; pin order drives the `pinned_first`
/// sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySettings {
    #[serde(default, deserialize_with = "serde_helpers::tag_list")]
    pub pinned_tags: Vec<String>,
    #[serde(default, deserialize_with = "serde_helpers::tag_list")]
    pub custom_tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let s: GallerySettings = serde_json::from_str("{}").unwrap();
        assert!(s.pinned_tags.is_empty());
        assert!(s.custom_tags.is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let s = GallerySettings {
            pinned_tags: vec!["A".to_string()],
            custom_tags: vec![],
            extra: Map::new(),
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["pinnedTags"][0], "A");
        assert!(json["customTags"].as_array().unwrap().is_empty());
    }
}
