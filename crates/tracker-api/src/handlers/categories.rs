//! Category handlers

use axum::{extract::State, Json};
use tracker_service::{CategoryResponse, CategoryService};

use crate::response::ApiResult;
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.list_categories().await?))
}

/// GET /categories/active
pub async fn list_active_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.list_active_categories().await?))
}
