//! Preset Model

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::serde_helpers;

/// Preset entity - one catalog entry of the gallery
///
/// `categories` holds free-form tag names. Fields this server does not know
/// about (written by import scripts) are kept in `extra` and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    #[serde(default, deserialize_with = "serde_helpers::string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "serde_helpers::optional_string")]
    pub prompt_en: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_string")]
    pub prompt_zh: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::tag_list")]
    pub categories: Vec<String>,
    /// Local upload path (`/uploads/...`) or absolute external URL
    #[serde(default, deserialize_with = "serde_helpers::optional_string")]
    pub image: Option<String>,
    /// ISO-8601 creation time; older records may lack it
    #[serde(
        default,
        deserialize_with = "serde_helpers::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Preset {
    /// Effective creation time in epoch milliseconds
    ///
    /// Falls back to the id as a millisecond timestamp when `createdAt` is
    /// absent or unparseable, and to 0 when neither works.
    pub fn created_millis(&self) -> i64 {
        self.created_at
            .as_deref()
            .and_then(parse_timestamp_millis)
            .or_else(|| self.id.trim().parse::<i64>().ok())
            .unwrap_or(0)
    }

    /// Whether `name` appears in this preset's categories
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Case-insensitive substring match against title and both prompts
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_text(&self, needle: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(needle);
        contains(&self.title)
            || self.prompt_en.as_deref().is_some_and(contains)
            || self.prompt_zh.as_deref().is_some_and(contains)
    }

    /// Whether the image refers to a locally uploaded file
    pub fn local_image_name(&self) -> Option<&str> {
        self.image
            .as_deref()
            .and_then(|path| path.strip_prefix("/uploads/"))
            .filter(|name| !name.is_empty() && !name.contains('/') && !name.contains(".."))
    }
}

/// Parse an ISO-8601 timestamp, a naive date-time or a plain date
pub fn parse_timestamp_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc().timestamp_millis());
    }
    None
}

/// Create preset payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetCreate {
    #[serde(default)]
    pub title: String,
    pub prompt_en: Option<String>,
    pub prompt_zh: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::tag_list")]
    pub categories: Vec<String>,
    pub image: Option<String>,
}

/// Update preset payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetUpdate {
    pub title: Option<String>,
    pub prompt_en: Option<String>,
    pub prompt_zh: Option<String>,
    pub categories: Option<Vec<String>>,
    pub image: Option<String>,
}
