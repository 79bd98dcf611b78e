//! Invite service
//!
//! Handles invite creation, deletion and listings. Status changes live in
//! [`AdmissionService`](super::AdmissionService).

use std::collections::HashMap;

use tracing::{info, instrument};
use tracker_core::{DomainError, Invite, InviteId, InviteQuery, InviteStatus, UserId};

use crate::dto::{CreateInviteRequest, InviteResponse, InviteWithDetails};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::event::EventService;

/// Invite service
pub struct InviteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InviteService<'a> {
    /// Create a new InviteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Invite a user to an event. The invite starts out pending; capacity is
    /// only checked when it is accepted.
    #[instrument(skip(self, request))]
    pub async fn create_invite(
        &self,
        actor: UserId,
        request: CreateInviteRequest,
    ) -> ServiceResult<InviteResponse> {
        let CreateInviteRequest {
            event_id,
            invited_user_id,
            participant_count,
        } = request;

        if !self.ctx.event_repo().exists(event_id).await? {
            return Err(ServiceError::InvalidReference(DomainError::EventNotFound(event_id)));
        }
        if !self.ctx.user_repo().exists(invited_user_id).await? {
            return Err(ServiceError::InvalidReference(DomainError::UserNotFound(
                invited_user_id,
            )));
        }
        if self.ctx.invite_repo().exists_for(event_id, invited_user_id).await? {
            return Err(ServiceError::InvalidReference(DomainError::DuplicateInvite));
        }

        let invite = Invite::new(event_id, invited_user_id)
            .with_participant_count(participant_count.unwrap_or(1));

        // A racing create can still hit the unique index
        self.ctx.invite_repo().create(&invite).await.map_err(|e| match e {
            DomainError::DuplicateInvite => ServiceError::InvalidReference(e),
            other => other.into(),
        })?;

        info!(
            invite_id = %invite.id,
            event_id = %event_id,
            invited_user_id = %invited_user_id,
            actor = %actor,
            "Invite created"
        );

        self.with_details(invite).await
    }

    /// Delete an invite regardless of its status
    #[instrument(skip(self))]
    pub async fn delete_invite(&self, actor: UserId, invite_id: InviteId) -> ServiceResult<()> {
        self.ctx.invite_repo().delete(invite_id).await?;

        info!(invite_id = %invite_id, actor = %actor, "Invite deleted");

        Ok(())
    }

    /// Get a single invite with details
    #[instrument(skip(self))]
    pub async fn get_invite(&self, invite_id: InviteId) -> ServiceResult<InviteResponse> {
        let invite = self
            .ctx
            .invite_repo()
            .find_by_id(invite_id)
            .await?
            .ok_or(DomainError::InviteNotFound(invite_id))?;

        self.with_details(invite).await
    }

    /// List invites matching the filter
    #[instrument(skip(self))]
    pub async fn list_invites(&self, query: InviteQuery) -> ServiceResult<Vec<InviteResponse>> {
        let invites = self.ctx.invite_repo().find(query).await?;
        self.attach_details(invites).await
    }

    /// All invites addressed to a user
    pub async fn list_for_user(&self, user_id: UserId) -> ServiceResult<Vec<InviteResponse>> {
        self.list_invites(InviteQuery {
            user_id: Some(user_id),
            ..InviteQuery::default()
        })
        .await
    }

    /// Invites still awaiting an answer from a user
    pub async fn list_pending_for_user(
        &self,
        user_id: UserId,
    ) -> ServiceResult<Vec<InviteResponse>> {
        self.list_invites(InviteQuery {
            user_id: Some(user_id),
            status: Some(InviteStatus::Pending),
            ..InviteQuery::default()
        })
        .await
    }

    /// Reload the relations of a single invite for a response
    pub(crate) async fn with_details(&self, invite: Invite) -> ServiceResult<InviteResponse> {
        self.attach_details(vec![invite])
            .await?
            .pop()
            .ok_or_else(|| ServiceError::internal("invite details went missing"))
    }

    /// Batch-load events (with categories and creators) and invitees
    async fn attach_details(&self, invites: Vec<Invite>) -> ServiceResult<Vec<InviteResponse>> {
        if invites.is_empty() {
            return Ok(Vec::new());
        }

        let mut event_ids: Vec<_> = invites.iter().map(|i| i.event_id).collect();
        event_ids.sort_unstable();
        event_ids.dedup();
        let events: HashMap<_, _> = EventService::new(self.ctx)
            .load_details(&event_ids)
            .await?
            .into_iter()
            .map(|details| (details.event.id, details))
            .collect();

        let mut user_ids: Vec<_> = invites.iter().map(|i| i.invited_user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();
        let users: HashMap<_, _> = self
            .ctx
            .user_repo()
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(invites
            .into_iter()
            .map(|invite| {
                let event = events.get(&invite.event_id).cloned();
                let invitee = users.get(&invite.invited_user_id).cloned();
                InviteResponse::from(InviteWithDetails {
                    invite,
                    event,
                    invitee,
                })
            })
            .collect())
    }
}
