//! Test fixtures and wire types
//!
//! Client-side views of the API payloads, kept independent of the server DTOs.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create event request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub start_date_time: String,
    pub max_capacity: Option<i32>,
    pub is_visible: Option<bool>,
}

impl CreateEventRequest {
    pub fn with_capacity(max_capacity: Option<i32>) -> Self {
        Self {
            title: format!("Test Event {}", unique_suffix()),
            start_date_time: (Utc::now() + Duration::days(7)).to_rfc3339(),
            max_capacity,
            is_visible: None,
        }
    }
}

/// Event response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub max_capacity: Option<i32>,
    pub is_cancelled: bool,
    pub is_visible: bool,
    pub created_by: String,
}

/// Create invite request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInviteRequest {
    pub event_id: String,
    pub invited_user_id: String,
    pub participant_count: Option<i32>,
}

impl CreateInviteRequest {
    pub fn new(event_id: &str, invited_user_id: impl ToString) -> Self {
        Self {
            event_id: event_id.to_string(),
            invited_user_id: invited_user_id.to_string(),
            participant_count: None,
        }
    }
}

/// Status change request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: String,
    pub participant_count: Option<i32>,
}

impl UpdateStatusRequest {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
            participant_count: None,
        }
    }

    pub fn accept(participant_count: i32) -> Self {
        Self {
            status: "Accepted".to_string(),
            participant_count: Some(participant_count),
        }
    }
}

/// Invite response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteResponse {
    pub id: String,
    pub event_id: String,
    pub invited_user_id: String,
    pub status: String,
    pub participant_count: i32,
    pub event: Option<EventResponse>,
    pub invited_user: Option<UserResponse>,
}

/// User response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Capacity response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityResponse {
    pub event_id: String,
    pub max_capacity: i32,
    pub accepted_participants: i64,
    pub available_spaces: i64,
}

/// Create comment request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub event_id: String,
    pub content: String,
    pub comment_type: Option<String>,
}

/// Comment response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub content: String,
    pub comment_type: String,
}

/// Add saved invitee request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSavedInviteeRequest {
    pub owner_user_id: String,
    pub saved_user_id: String,
}

impl CreateSavedInviteeRequest {
    pub fn new(owner_user_id: impl ToString, saved_user_id: impl ToString) -> Self {
        Self {
            owner_user_id: owner_user_id.to_string(),
            saved_user_id: saved_user_id.to_string(),
        }
    }
}

/// Saved invitee response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedInviteeResponse {
    pub owner_user_id: String,
    pub saved_user_id: String,
    pub saved_user: Option<UserResponse>,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
