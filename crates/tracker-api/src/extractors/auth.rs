//! Bearer token extractor
//!
//! Mutating routes identify the acting user from a signed access token.
//! Read-only routes take no token.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tracker_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Acting user resolved from a bearer token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let user_id = AppState::from_ref(state)
            .jwt_service()
            .validate_access_token(bearer.token())
            .and_then(|claims| claims.user_id())
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected bearer token");
                ApiError::from(e)
            })?;

        Ok(Self { user_id })
    }
}
