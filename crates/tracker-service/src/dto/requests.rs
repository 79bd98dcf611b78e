//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracker_core::{CategoryId, EventId, UserId};
use validator::Validate;

// ============================================================================
// Invite Requests
// ============================================================================

/// Change the status of an invite
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInviteStatusRequest {
    /// One of pending, accepted, declined, cancelled (any case)
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,

    #[validate(range(min = 1, message = "Participant count must be at least 1"))]
    pub participant_count: Option<i32>,
}

/// Invite a user to an event
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInviteRequest {
    pub event_id: EventId,

    pub invited_user_id: UserId,

    #[validate(range(min = 1, message = "Participant count must be at least 1"))]
    pub participant_count: Option<i32>,
}

// ============================================================================
// Saved Invitee Requests
// ============================================================================

/// Put a user on an owner's invitee shortlist
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSavedInviteeRequest {
    pub owner_user_id: UserId,

    pub saved_user_id: UserId,
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create an event, or replace the editable fields of an existing one
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub start_date_time: DateTime<Utc>,

    pub end_date_time: Option<DateTime<Utc>>,

    #[validate(length(max = 500, message = "Address must be at most 500 characters"))]
    pub address: Option<String>,

    pub category_id: Option<CategoryId>,

    #[validate(length(max = 50, message = "Event type must be at most 50 characters"))]
    pub event_type: Option<String>,

    /// Unset or 0 means unlimited
    #[validate(range(min = 0, message = "Max capacity cannot be negative"))]
    pub max_capacity: Option<i32>,

    pub is_visible: Option<bool>,

    pub parent_event_id: Option<EventId>,
}

/// Mark an event cancelled and/or completed
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventStatusRequest {
    pub is_cancelled: Option<bool>,
    pub is_completed: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventVisibilityRequest {
    pub is_visible: bool,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Post a comment or announcement on an event
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub event_id: EventId,

    #[validate(length(min = 1, max = 1000, message = "Content must be 1-1000 characters"))]
    pub content: String,

    /// "comment" (default) or "announcement"
    pub comment_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Content must be 1-1000 characters"))]
    pub content: String,
}
