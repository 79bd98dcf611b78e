//! Saved invitee entity - a user's personal shortlist of people to invite

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::UserId;

/// A user kept on another user's invitee list. Keyed by the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedInvitee {
    pub owner_user_id: UserId,
    pub saved_user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl SavedInvitee {
    /// Fails with `CannotSaveSelf` when both sides are the same user
    pub fn new(owner_user_id: UserId, saved_user_id: UserId) -> Result<Self, DomainError> {
        if owner_user_id == saved_user_id {
            return Err(DomainError::CannotSaveSelf);
        }
        Ok(Self {
            owner_user_id,
            saved_user_id,
            created_at: Utc::now(),
        })
    }
}
