//! Saved invitee database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for saved_invitees table
#[derive(Debug, Clone, FromRow)]
pub struct SavedInviteeModel {
    pub owner_user_id: Uuid,
    pub saved_user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
