//! User handlers

use axum::{extract::State, Json};
use tracker_core::UserId;
use tracker_service::{UserResponse, UserService};

use crate::extractors::IdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get user by ID (public profile)
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<UserId>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.get_user(user_id).await?))
}
