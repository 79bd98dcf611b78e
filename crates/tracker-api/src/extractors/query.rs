//! Query string extractors for list endpoints

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracker_core::{EventId, InviteQuery, InviteStatus, UserId};

use crate::response::ApiError;

/// Query extractor that reports malformed parameters as `400 INVALID_QUERY_PARAMETER`
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(inner) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(QueryParams(inner))
    }
}

/// `GET /invites?userId&eventId&status`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteListParams {
    pub user_id: Option<UserId>,
    pub event_id: Option<EventId>,
    pub status: Option<String>,
}

impl TryFrom<InviteListParams> for InviteQuery {
    type Error = ApiError;

    fn try_from(params: InviteListParams) -> Result<Self, Self::Error> {
        let status = params
            .status
            .as_deref()
            .map(InviteStatus::parse)
            .transpose()?;

        Ok(Self {
            user_id: params.user_id,
            event_id: params.event_id,
            status,
        })
    }
}

/// `GET /events?userId&search`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListParams {
    pub user_id: Option<UserId>,
    pub search: Option<String>,
}

/// `GET /events/hidden?userId`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenEventParams {
    pub user_id: Option<UserId>,
}

/// `GET /events/{id}/comments?commentType`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListParams {
    pub comment_type: Option<String>,
}
