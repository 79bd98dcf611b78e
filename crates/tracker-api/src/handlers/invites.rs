//! Invite handlers
//!
//! Invite creation, listing, deletion and the capacity-checked status change.

use axum::{extract::State, Json};
use tracker_core::{InviteId, InviteQuery, UserId};
use tracker_service::{
    AdmissionService, CreateInviteRequest, InviteResponse, InviteService,
    UpdateInviteStatusRequest,
};

use crate::extractors::{AuthUser, IdPath, InviteListParams, QueryParams, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List invites, optionally filtered by user, event and status
///
/// GET /invites?userId&eventId&status
pub async fn list_invites(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<InviteListParams>,
) -> ApiResult<Json<Vec<InviteResponse>>> {
    let query = InviteQuery::try_from(params)?;
    let service = InviteService::new(state.service_context());
    Ok(Json(service.list_invites(query).await?))
}

/// Invite a user to an event
///
/// POST /invites
pub async fn create_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateInviteRequest>,
) -> ApiResult<Json<InviteResponse>> {
    let service = InviteService::new(state.service_context());
    let response = service.create_invite(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Get a single invite
///
/// GET /invites/{invite_id}
pub async fn get_invite(
    State(state): State<AppState>,
    IdPath(invite_id): IdPath<InviteId>,
) -> ApiResult<Json<InviteResponse>> {
    let service = InviteService::new(state.service_context());
    Ok(Json(service.get_invite(invite_id).await?))
}

/// Change an invite's status; accepting is checked against event capacity
///
/// PUT /invites/{invite_id}/status
pub async fn update_invite_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(invite_id): IdPath<InviteId>,
    ValidatedJson(request): ValidatedJson<UpdateInviteStatusRequest>,
) -> ApiResult<Json<InviteResponse>> {
    let service = AdmissionService::new(state.service_context());
    let response = service
        .set_invite_status(auth.user_id, invite_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete an invite
///
/// DELETE /invites/{invite_id}
pub async fn delete_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(invite_id): IdPath<InviteId>,
) -> ApiResult<NoContent> {
    let service = InviteService::new(state.service_context());
    service.delete_invite(auth.user_id, invite_id).await?;
    Ok(NoContent)
}

/// All invites addressed to a user
///
/// GET /users/{user_id}/invites
pub async fn list_user_invites(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<UserId>,
) -> ApiResult<Json<Vec<InviteResponse>>> {
    let service = InviteService::new(state.service_context());
    Ok(Json(service.list_for_user(user_id).await?))
}

/// Pending invites of a user
///
/// GET /users/{user_id}/invites/pending
pub async fn list_pending_user_invites(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<UserId>,
) -> ApiResult<Json<Vec<InviteResponse>>> {
    let service = InviteService::new(state.service_context());
    Ok(Json(service.list_pending_for_user(user_id).await?))
}
