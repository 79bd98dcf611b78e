//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase
//! field names.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracker_core::{CategoryId, CommentId, CommentType, EventId, InviteId, InviteStatus, UserId};

// ============================================================================
// User Responses
// ============================================================================

/// Public user profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// An entry on an owner's invitee shortlist
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedInviteeResponse {
    pub owner_user_id: UserId,
    pub saved_user_id: UserId,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_user: Option<UserResponse>,
}

// ============================================================================
// Category Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub is_active: bool,
}

// ============================================================================
// Event Responses
// ============================================================================

/// Event with its category and creator resolved
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: Option<DateTime<Utc>>,
    pub address: Option<String>,
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResponse>,
    pub event_type: Option<String>,
    pub max_capacity: Option<i32>,
    pub is_cancelled: bool,
    pub is_completed: bool,
    pub is_visible: bool,
    pub created_by: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<UserResponse>,
    pub parent_event_id: Option<EventId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Advisory capacity snapshot of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityResponse {
    pub event_id: EventId,
    /// Unset capacity is reported as 0
    pub max_capacity: i32,
    pub accepted_participants: i64,
    pub available_spaces: i64,
}

// ============================================================================
// Invite Responses
// ============================================================================

/// Invite with its event (and category) and invitee
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteResponse {
    pub id: InviteId,
    pub event_id: EventId,
    pub invited_user_id: UserId,
    pub status: InviteStatus,
    pub participant_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invited_user: Option<UserResponse>,
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: CommentId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub content: String,
    pub comment_type: CommentType,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_response_json() {
        let event_id = EventId::new();
        let response = CapacityResponse {
            event_id,
            max_capacity: 5,
            accepted_participants: 3,
            available_spaces: 2,
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["eventId"], event_id.to_string());
        assert_eq!(json["maxCapacity"], 5);
        assert_eq!(json["acceptedParticipants"], 3);
        assert_eq!(json["availableSpaces"], 2);
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert!(!not_ready.is_ready());
        assert_eq!(not_ready.checks.database, "unhealthy");
    }
}
