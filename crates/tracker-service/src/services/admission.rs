//! Admission service
//!
//! Owns invite status transitions. Accepting an invite consumes event
//! capacity and is delegated to the repository's locked accept path; every
//! other transition is written unconditionally.

use tracing::{info, instrument, warn};
use tracker_core::{CapacitySnapshot, DomainError, EventId, Invite, InviteId, InviteStatus, UserId};

use crate::dto::{CapacityResponse, InviteResponse, UpdateInviteStatusRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::invite::InviteService;

/// Admission service
pub struct AdmissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdmissionService<'a> {
    /// Create a new AdmissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Change an invite's status on behalf of `actor`.
    ///
    /// Accepting fails with `CapacityExceeded` when the other accepted invites
    /// of the event leave too little room; the invite is then left unchanged.
    /// The returned invite is reloaded with its event, category and invitee.
    #[instrument(skip(self, request), fields(status = %request.status))]
    pub async fn set_invite_status(
        &self,
        actor: UserId,
        invite_id: InviteId,
        request: UpdateInviteStatusRequest,
    ) -> ServiceResult<InviteResponse> {
        let status = InviteStatus::parse(&request.status)?;

        let invite = self
            .apply_status(invite_id, status, request.participant_count)
            .await?;

        info!(
            invite_id = %invite.id,
            event_id = %invite.event_id,
            actor = %actor,
            status = %invite.status,
            participant_count = invite.participant_count,
            "Invite status updated"
        );

        InviteService::new(self.ctx).with_details(invite).await
    }

    /// Advisory capacity view of an event
    #[instrument(skip(self))]
    pub async fn get_capacity(&self, event_id: EventId) -> ServiceResult<CapacityResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or(DomainError::EventNotFound(event_id))?;

        let accepted = self.ctx.invite_repo().accepted_participants(event_id).await?;

        Ok(CapacitySnapshot::new(event.id, event.max_capacity, accepted).into())
    }

    /// Write the status, retrying transient storage failures with a linear backoff
    async fn apply_status(
        &self,
        invite_id: InviteId,
        status: InviteStatus,
        participant_count: Option<i32>,
    ) -> ServiceResult<Invite> {
        let config = self.ctx.admission();
        let max_attempts = config.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            let result = if status.consumes_capacity() {
                self.ctx
                    .invite_repo()
                    .accept_within_capacity(invite_id, participant_count)
                    .await
            } else {
                self.ctx
                    .invite_repo()
                    .update_status(invite_id, status, participant_count)
                    .await
            };

            match result {
                Ok(invite) => return Ok(invite),
                Err(err) if err.is_transient() && attempt < max_attempts => {
                    warn!(
                        invite_id = %invite_id,
                        attempt,
                        max_attempts,
                        error = %err,
                        "Transient failure updating invite status, retrying"
                    );
                    tokio::time::sleep(config.retry_backoff() * attempt).await;
                    attempt += 1;
                }
                Err(err) => {
                    if let DomainError::CapacityExceeded { available } = err {
                        warn!(invite_id = %invite_id, available, "Invite acceptance rejected");
                    }
                    return Err(err.into());
                }
            }
        }
    }
}
