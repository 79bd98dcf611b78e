//! User service
//!
//! Read-only profile lookups. Accounts are provisioned by the identity layer.

use tracing::instrument;
use tracker_core::{DomainError, UserId};

use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get user by ID (public profile)
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(UserResponse::from(&user))
    }
}
