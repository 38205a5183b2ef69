//! 目录模块 - 标签/分类一致性引擎与预设查询
//!
//! # 模块结构
//!
//! | 模块 | 说明 |
//! |------|------|
//! | [`tag_index`] | 标签视图 (引用计数 + 自定义标签) |
//! | [`pin_registry`] | 置顶标签 (有序集合) |
//! | [`retag`] | 批量重命名 / 合并 / 删除 |
//! | [`query`] | 过滤、排序、分页 |
//! | [`images`] | 上传图片清理 |
//! | [`service`] | 加载 → 计算 → 保存 编排 |
//!
//! 除 [`service`] 与 [`images`] 外均为纯函数，不做 I/O。

pub mod images;
pub mod pin_registry;
pub mod query;
pub mod retag;
pub mod service;
pub mod tag_index;

pub use images::UploadCleanup;
pub use retag::Retag;
pub use service::CatalogService;
