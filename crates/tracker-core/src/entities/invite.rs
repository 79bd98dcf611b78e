//! Invite entity - links one user to one event with an RSVP status

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{EventId, InviteId, UserId};

/// RSVP status of an invite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InviteStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
    Cancelled,
}

impl InviteStatus {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Accepted,
        Self::Declined,
        Self::Cancelled,
    ];

    /// Lowercase form used for storage and in error messages
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a status name, ignoring ASCII case
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| DomainError::InvalidStatus(value.to_string()))
    }

    /// Only accepted invites consume capacity
    #[inline]
    pub fn consumes_capacity(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InviteStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Invite entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invite {
    pub id: InviteId,
    pub event_id: EventId,
    pub invited_user_id: UserId,
    pub status: InviteStatus,
    pub participant_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Invite {
    /// Create a new pending invite for a single participant
    pub fn new(event_id: EventId, invited_user_id: UserId) -> Self {
        Self {
            id: InviteId::new(),
            event_id,
            invited_user_id,
            status: InviteStatus::Pending,
            participant_count: 1,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Set the participant count, floored at one
    pub fn with_participant_count(mut self, count: i32) -> Self {
        self.participant_count = count.max(1);
        self
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.status == InviteStatus::Accepted
    }
}
