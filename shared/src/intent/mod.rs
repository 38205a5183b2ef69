//! Intent 模块 - 预设查询的请求与响应类型
//!
//! 查询意图与 HTTP 层解耦：handler 负责把 query string 解析成
//! [`PresetQuery`]，核心只接收类型化的查询。

pub mod query;

// Re-exports
pub use query::*;
