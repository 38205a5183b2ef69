//! API 路由模块
//!
//! # 路由列表
//!
//! | 模块 | 前缀 | 说明 |
//! |------|------|------|
//! | [`health`] | /health | 健康检查 |
//! | [`presets`] | /api/presets | 预设查询与 CRUD |
//! | [`tags`] | /api/tags | 标签列表、自定义、置顶、批量 |
//! | [`settings`] | /api/settings | 置顶与自定义标签 |
//! | - | /uploads | 上传图片静态文件 (见 `core::server`) |

pub mod health;
pub mod presets;
pub mod settings;
pub mod tags;

use axum::http::Uri;

use crate::utils::AppError;

/// 未匹配路由 - 返回统一错误体
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
