//! Saved invitee service
//!
//! A per-user shortlist of people the owner invites often.

use std::collections::HashMap;

use tracing::{info, instrument};
use tracker_core::{DomainError, SavedInvitee, UserId};

use crate::dto::{CreateSavedInviteeRequest, SavedInviteeResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Saved invitee service
pub struct SavedInviteeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SavedInviteeService<'a> {
    /// Create a new SavedInviteeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Profiles of the users on `owner`'s list, oldest entry first
    #[instrument(skip(self))]
    pub async fn list_saved(&self, owner: UserId) -> ServiceResult<Vec<UserResponse>> {
        if !self.ctx.user_repo().exists(owner).await? {
            return Err(ServiceError::InvalidReference(DomainError::UserNotFound(owner)));
        }

        let entries = self.ctx.saved_invitee_repo().find_by_owner(owner).await?;
        let ids: Vec<_> = entries.iter().map(|e| e.saved_user_id).collect();
        let mut users: HashMap<_, _> = self
            .ctx
            .user_repo()
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(ids
            .iter()
            .filter_map(|id| users.remove(id))
            .map(UserResponse::from)
            .collect())
    }

    /// Add a user to the actor's own list
    #[instrument(skip(self, request))]
    pub async fn add_saved(
        &self,
        actor: UserId,
        request: CreateSavedInviteeRequest,
    ) -> ServiceResult<SavedInviteeResponse> {
        let CreateSavedInviteeRequest {
            owner_user_id,
            saved_user_id,
        } = request;

        if actor != owner_user_id {
            return Err(DomainError::NotListOwner.into());
        }
        let entry = SavedInvitee::new(owner_user_id, saved_user_id)?;

        if !self.ctx.user_repo().exists(owner_user_id).await? {
            return Err(ServiceError::InvalidReference(DomainError::UserNotFound(owner_user_id)));
        }
        let saved_user = self
            .ctx
            .user_repo()
            .find_by_id(saved_user_id)
            .await?
            .ok_or(ServiceError::InvalidReference(DomainError::UserNotFound(saved_user_id)))?;

        if self
            .ctx
            .saved_invitee_repo()
            .exists(owner_user_id, saved_user_id)
            .await?
        {
            return Err(ServiceError::InvalidReference(DomainError::DuplicateSavedInvitee));
        }
        // Unique violation from a concurrent insert of the same pair
        self.ctx
            .saved_invitee_repo()
            .create(&entry)
            .await
            .map_err(|e| match e {
                DomainError::DuplicateSavedInvitee => ServiceError::InvalidReference(e),
                other => other.into(),
            })?;

        info!(owner = %owner_user_id, saved = %saved_user_id, "Saved invitee added");

        let mut response = SavedInviteeResponse::from(entry);
        response.saved_user = Some(UserResponse::from(saved_user));
        Ok(response)
    }

    /// Remove a user from the actor's own list
    #[instrument(skip(self))]
    pub async fn remove_saved(
        &self,
        actor: UserId,
        owner: UserId,
        saved: UserId,
    ) -> ServiceResult<()> {
        if actor != owner {
            return Err(DomainError::NotListOwner.into());
        }
        self.ctx.saved_invitee_repo().delete(owner, saved).await?;

        info!(owner = %owner, saved = %saved, "Saved invitee removed");
        Ok(())
    }
}
