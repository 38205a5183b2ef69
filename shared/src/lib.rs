//! Shared types for the prompt gallery
//!
//! Common types used by the server crate and its callers: data models,
//! query types, error types and response structures.

pub mod error;
pub mod intent;
pub mod models;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

// Intent re-exports
pub use intent::{PresetPage, PresetQuery, PresetQueryResult, SortMode};
