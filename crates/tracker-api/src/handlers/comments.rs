//! Comment handlers

use axum::{extract::State, Json};
use tracker_core::{CommentId, EventId};
use tracker_service::{CommentResponse, CommentService, CreateCommentRequest, UpdateCommentRequest};

use crate::extractors::{AuthUser, CommentListParams, IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /events/{event_id}/comments?commentType
pub async fn list_comments(
    State(state): State<AppState>,
    IdPath(event_id): IdPath<EventId>,
    QueryParams(params): QueryParams<CommentListParams>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service
        .list_comments(event_id, params.comment_type.as_deref())
        .await?;
    Ok(Json(comments))
}

/// POST /comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.create_comment(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// PUT /comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath<CommentId>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    Ok(Json(
        service
            .update_comment(auth.user_id, comment_id, request)
            .await?,
    ))
}

/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath<CommentId>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete_comment(auth.user_id, comment_id).await?;
    Ok(NoContent)
}
