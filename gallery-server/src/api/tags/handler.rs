//! Tag API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{PinnedTags, TagBatchResult, TagBatchUpdate, TagCount, TagCreate, TagPinToggle};

/// GET /api/tags - 获取所有标签 (按引用数降序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<TagCount>>> {
    Ok(Json(state.catalog.list_tags().await))
}

/// POST /api/tags - 创建自定义标签
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TagCreate>,
) -> AppResult<Json<TagCreate>> {
    let tag = state.catalog.create_custom_tag(&payload.name).await?;
    Ok(Json(tag))
}

/// POST /api/tags/pin - 切换置顶
pub async fn toggle_pin(
    State(state): State<ServerState>,
    Json(payload): Json<TagPinToggle>,
) -> AppResult<Json<PinnedTags>> {
    let pinned = state.catalog.toggle_pin(&payload.tag).await?;
    Ok(Json(pinned))
}

/// POST /api/tags/batch - 批量重命名 / 合并 / 删除
pub async fn batch_update(
    State(state): State<ServerState>,
    Json(payload): Json<TagBatchUpdate>,
) -> AppResult<Json<TagBatchResult>> {
    let result = state
        .catalog
        .batch_retag(&payload.old_names, payload.new_name.as_deref())
        .await?;
    Ok(Json(result))
}
