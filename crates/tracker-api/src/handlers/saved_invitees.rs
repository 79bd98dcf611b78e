//! Saved invitee handlers
//!
//! A user's shortlist of people to invite.

use axum::{extract::State, Json};
use tracker_core::UserId;
use tracker_service::{
    CreateSavedInviteeRequest, SavedInviteeResponse, SavedInviteeService, UserResponse,
};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Users saved by an owner
///
/// GET /saved-invitees/{owner_user_id}
pub async fn list_saved_invitees(
    State(state): State<AppState>,
    IdPath(owner_user_id): IdPath<UserId>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = SavedInviteeService::new(state.service_context());
    Ok(Json(service.list_saved(owner_user_id).await?))
}

/// POST /saved-invitees
pub async fn add_saved_invitee(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSavedInviteeRequest>,
) -> ApiResult<Created<Json<SavedInviteeResponse>>> {
    let service = SavedInviteeService::new(state.service_context());
    let response = service.add_saved(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// DELETE /saved-invitees/{owner_user_id}/{saved_user_id}
pub async fn remove_saved_invitee(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath((owner_user_id, saved_user_id)): IdPath<(UserId, UserId)>,
) -> ApiResult<NoContent> {
    let service = SavedInviteeService::new(state.service_context());
    service
        .remove_saved(auth.user_id, owner_user_id, saved_user_id)
        .await?;
    Ok(NoContent)
}
