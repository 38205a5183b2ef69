//! Settings API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::GallerySettings;

/// GET /api/settings - 获取置顶与自定义标签
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<GallerySettings>> {
    Ok(Json(state.catalog.settings().await))
}
