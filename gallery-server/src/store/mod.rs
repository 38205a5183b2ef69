//! 文档存储 - 预设集合与设置文档的持久化
//!
//! # 存储契约
//!
//! - `load()` 永不失败：文件缺失或损坏时返回默认值 (空集合)
//! - `save()` 原子替换：先写临时文件再 rename，读者不会看到半截 JSON
//!
//! # 实现
//!
//! - [`JsonFileStore`] - 工作目录下的 JSON 文件
//! - [`MemoryStore`] - 进程内存储 (测试、嵌入)

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{GallerySettings, Preset};

/// Load/save accessor for one persisted document
#[async_trait]
pub trait DocumentStore<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Current document; a missing or unreadable document yields `T::default()`
    async fn load(&self) -> T;

    /// Replace the document
    async fn save(&self, doc: &T) -> AppResult<()>;
}

/// The preset collection in arrival order
pub type PresetStore = dyn DocumentStore<Vec<Preset>>;

/// The settings document (pin and custom tag registries)
pub type SettingsStore = dyn DocumentStore<GallerySettings>;
