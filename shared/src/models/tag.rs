//! Tag Model
//!
//! Tags are not stored as records. A tag exists while some preset references
//! it or while it is registered in the custom tag list of the settings
//! document; these types are the derived view and the request payloads of the
//! tag management API.

use serde::{Deserialize, Serialize};

/// Derived tag entry with its usage count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

impl TagCount {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Create custom tag payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCreate {
    #[serde(default)]
    pub name: String,
}

/// Toggle pin payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagPinToggle {
    #[serde(default)]
    pub tag: String,
}

/// Pinned tags after a toggle, in pin order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedTags {
    pub pinned_tags: Vec<String>,
}

/// Batch rename / merge / delete payload
///
/// `new_name = None` deletes every name in `old_names`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagBatchUpdate {
    #[serde(default)]
    pub old_names: Vec<String>,
    #[serde(default)]
    pub new_name: Option<String>,
}

/// Batch operation result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagBatchResult {
    pub success: bool,
    pub updated_count: usize,
}
