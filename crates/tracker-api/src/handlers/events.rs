//! Event handlers

use axum::{extract::State, Json};
use tracker_core::EventId;
use tracker_service::{
    AdmissionService, CapacityResponse, EventRequest, EventResponse, EventService,
    UpdateEventStatusRequest, UpdateEventVisibilityRequest,
};

use crate::extractors::{
    AuthUser, EventListParams, HiddenEventParams, IdPath, QueryParams, ValidatedJson,
};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /events?userId&search
pub async fn list_events(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<EventListParams>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    Ok(Json(service.list_events(params.user_id, params.search).await?))
}

/// GET /events/hidden?userId
pub async fn list_hidden_events(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<HiddenEventParams>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    Ok(Json(service.list_hidden_events(params.user_id).await?))
}

/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<EventRequest>,
) -> ApiResult<Created<Json<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let response = service.create_event(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// GET /events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    IdPath(event_id): IdPath<EventId>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    Ok(Json(service.get_event(event_id).await?))
}

/// PUT /events/{event_id}
pub async fn update_event(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(event_id): IdPath<EventId>,
    ValidatedJson(request): ValidatedJson<EventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    Ok(Json(service.update_event(auth.user_id, event_id, request).await?))
}

/// PATCH /events/{event_id}/status
pub async fn update_event_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(event_id): IdPath<EventId>,
    ValidatedJson(request): ValidatedJson<UpdateEventStatusRequest>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    Ok(Json(
        service
            .set_event_status(auth.user_id, event_id, request)
            .await?,
    ))
}

/// PATCH /events/{event_id}/visibility
pub async fn update_event_visibility(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(event_id): IdPath<EventId>,
    ValidatedJson(request): ValidatedJson<UpdateEventVisibilityRequest>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    Ok(Json(
        service
            .set_event_visibility(auth.user_id, event_id, request)
            .await?,
    ))
}

/// Advisory capacity snapshot
///
/// GET /events/{event_id}/capacity
pub async fn get_capacity(
    State(state): State<AppState>,
    IdPath(event_id): IdPath<EventId>,
) -> ApiResult<Json<CapacityResponse>> {
    let service = AdmissionService::new(state.service_context());
    Ok(Json(service.get_capacity(event_id).await?))
}
