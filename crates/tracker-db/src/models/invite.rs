//! Invite database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the event_invites table
#[derive(Debug, Clone, FromRow)]
pub struct InviteModel {
    pub id: Uuid,
    pub event_id: Uuid,
    pub invited_user_id: Uuid,
    /// Lowercase status name, constrained by a CHECK
    pub status: String,
    pub participant_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
