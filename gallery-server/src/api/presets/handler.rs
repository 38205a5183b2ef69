//! Preset API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::intent::{PresetQuery, PresetQueryResult, SortMode};
use shared::models::{Preset, PresetCreate, PresetUpdate};

/// Raw query string of `GET /api/presets`
///
/// Kept as strings so that malformed paging values fall back to the unpaged
/// list instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub category: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl ListParams {
    fn into_query(self) -> AppResult<PresetQuery> {
        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<SortMode>().map_err(|e| {
                AppError::validation(e.to_string()).with_detail("field", "sort")
            })?),
        };

        Ok(PresetQuery {
            category: self.category,
            q: self.q,
            sort,
            page: parse_positive(self.page.as_deref()),
            page_size: parse_positive(self.page_size.as_deref()),
        })
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v >= 1)
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// GET /api/presets - 查询预设 (过滤、排序、可选分页)
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PresetQueryResult>> {
    let query = params.into_query()?;
    Ok(Json(state.catalog.query(&query).await))
}

/// GET /api/presets/:id - 获取单个预设
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Preset>> {
    Ok(Json(state.catalog.get_preset(&id).await?))
}

/// POST /api/presets - 创建预设
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PresetCreate>,
) -> AppResult<Json<Preset>> {
    let preset = state.catalog.create_preset(payload).await?;
    Ok(Json(preset))
}

/// PUT /api/presets/:id - 更新预设
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PresetUpdate>,
) -> AppResult<Json<Preset>> {
    let preset = state.catalog.update_preset(&id, payload).await?;
    Ok(Json(preset))
}

/// DELETE /api/presets/:id - 删除预设
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    state.catalog.delete_preset(&id).await?;
    Ok(Json(DeleteResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(sort: Option<&str>, page: Option<&str>, page_size: Option<&str>) -> ListParams {
        ListParams {
            sort: sort.map(str::to_string),
            page: page.map(str::to_string),
            page_size: page_size.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        let err = params(Some("oldest"), None, None).into_query().unwrap_err();
        assert_eq!(err.code, shared::error::ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_bad_paging_disables_paging() {
        let query = params(Some("latest"), Some("two"), Some("10")).into_query().unwrap();
        assert_eq!(query.sort, Some(SortMode::Latest));
        assert_eq!(query.pagination(), None);

        let query = params(None, Some("0"), Some("10")).into_query().unwrap();
        assert_eq!(query.pagination(), None);

        let query = params(None, Some("2"), Some(" 10 ")).into_query().unwrap();
        assert_eq!(query.pagination(), Some((2, 10)));
    }
}
