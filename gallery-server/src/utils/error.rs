//! 统一错误处理
//!
//! 错误类型统一定义在 `shared::error`，这里只做 re-export，
//! 让处理器和服务以 `crate::utils::AppError` 引用。
//!
//! # 错误码规范
//!
//! | 范围 | 分类 | 示例 |
//! |------|------|------|
//! | 0xxx | 通用错误 | 2 校验失败 |
//! | 6xxx | 目录错误 | 6001 预设不存在 |
//! | 9xxx | 系统错误 | 9002 存储错误 |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::preset_not_found(id))
//!
//! // 返回成功响应
//! Ok(Json(preset))
//! ```

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
