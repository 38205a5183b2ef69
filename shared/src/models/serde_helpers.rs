//! Lenient serde helpers for hand-edited and imported JSON documents
//!
//! The preset and settings files are written by scripts and by hand as often
//! as by the server, so decoding accepts a few shapes:
//! - ids as strings or numbers
//! - tag lists containing nulls, numbers or blank strings (dropped) and
//!   whitespace-padded names (trimmed)
//! - `null` wherever a string or list is expected

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a string that may arrive as a number or null
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Deserialize an optional string, treating non-string values as absent
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Canonical form of a tag name: trimmed, `None` when blank
///
/// Stored tag lists and tag names arriving in requests both go through this,
/// so a name read from disk always matches the same name sent by a caller.
pub fn normalize_tag_name(raw: &str) -> Option<&str> {
    let name = raw.trim();
    (!name.is_empty()).then_some(name)
}

/// Deserialize a tag list, keeping only non-blank string entries (trimmed)
///
/// A missing, null or non-array value yields an empty list.
pub fn tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => normalize_tag_name(&s).map(str::to_string),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "optional_string")]
        title: Option<String>,
        #[serde(default, deserialize_with = "tag_list")]
        tags: Vec<String>,
    }

    #[test]
    fn test_numeric_id_becomes_string() {
        let p: Probe = serde_json::from_str(r#"{"id": 1700000000000}"#).unwrap();
        assert_eq!(p.id, "1700000000000");
    }

    #[test]
    fn test_tag_list_drops_non_strings() {
        let p: Probe =
            serde_json::from_str(r#"{"id": "a", "tags": ["A", null, 3, "", "B", false]}"#).unwrap();
        assert_eq!(p.tags, vec!["A", "B"]);
    }

    #[test]
    fn test_tag_list_trims_padded_names() {
        let p: Probe = serde_json::from_str(r#"{"id": "a", "tags": [" A", "  ", "B\t"]}"#).unwrap();
        assert_eq!(p.tags, vec!["A", "B"]);
    }

    #[test]
    fn test_normalize_tag_name() {
        assert_eq!(normalize_tag_name("  建筑设计 "), Some("建筑设计"));
        assert_eq!(normalize_tag_name(" \t "), None);
    }

    #[test]
    fn test_tag_list_non_array_is_empty() {
        let p: Probe = serde_json::from_str(r#"{"id": "a", "tags": "A"}"#).unwrap();
        assert!(p.tags.is_empty());
    }

    #[test]
    fn test_optional_string_ignores_other_types() {
        let p: Probe = serde_json::from_str(r#"{"id": "a", "title": 12}"#).unwrap();
        assert!(p.title.is_none());
    }
}
