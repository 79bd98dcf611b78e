//! Event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: Option<DateTime<Utc>>,
    pub address: Option<String>,
    pub category_id: Option<i32>,
    pub event_type: Option<String>,
    pub max_capacity: Option<i32>,
    pub is_cancelled: bool,
    pub is_completed: bool,
    pub is_visible: bool,
    pub created_by: Uuid,
    pub parent_event_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
