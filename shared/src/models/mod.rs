//! Data models
//!
//! Shared between gallery-server and frontend (via API).
//! Field names are camelCase on the wire to match the stored documents.

pub mod preset;
pub mod serde_helpers;
pub mod settings;
pub mod tag;

// Re-exports
pub use preset::*;
pub use settings::*;
pub use tag::*;
