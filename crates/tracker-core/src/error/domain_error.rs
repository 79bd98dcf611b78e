//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CategoryId, CommentId, EventId, InviteId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Event invite with ID {0} does not exist")]
    InviteNotFound(InviteId),

    #[error("Event with ID {0} does not exist")]
    EventNotFound(EventId),

    #[error("User with ID {0} does not exist")]
    UserNotFound(UserId),

    #[error("Category with ID {0} does not exist")]
    CategoryNotFound(CategoryId),

    #[error("Comment with ID {0} does not exist")]
    CommentNotFound(CommentId),

    #[error("Saved invitee not found")]
    SavedInviteeNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid status '{0}'. Allowed values are: pending, accepted, declined, cancelled")]
    InvalidStatus(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Cannot add yourself as a saved invitee")]
    CannotSaveSelf,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the event creator can perform this action")]
    NotEventOwner,

    #[error("You can only modify your own comments")]
    NotCommentAuthor,

    #[error("You can only change your own saved invitees")]
    NotListOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Invite already exists for this user and event")]
    DuplicateInvite,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("This user is already in your invitees list")]
    DuplicateSavedInvitee,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Capacity exceeded. Only {available} spaces available.")]
    CapacityExceeded { available: i64 },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// Lock timeout, deadlock or serialization failure. Safe to retry.
    #[error("Transient error: {0}")]
    TransientError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::InviteNotFound(_) => "UNKNOWN_INVITE",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::SavedInviteeNotFound => "UNKNOWN_SAVED_INVITEE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::CannotSaveSelf => "CANNOT_SAVE_SELF",

            // Authorization
            Self::NotEventOwner => "NOT_EVENT_OWNER",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotListOwner => "NOT_LIST_OWNER",

            // Conflict
            Self::DuplicateInvite => "DUPLICATE_INVITE",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::DuplicateSavedInvitee => "DUPLICATE_SAVED_INVITEE",

            // Business Rules
            Self::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",

            // Infrastructure
            Self::TransientError(_) => "TRANSIENT_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::InviteNotFound(_)
                | Self::EventNotFound(_)
                | Self::UserNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::CommentNotFound(_)
                | Self::SavedInviteeNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidStatus(_)
                | Self::ContentTooLong { .. }
                | Self::CannotSaveSelf
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotEventOwner | Self::NotCommentAuthor | Self::NotListOwner
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateInvite | Self::EmailAlreadyExists | Self::DuplicateSavedInvitee
        )
    }

    /// Check if this is a business rule violation
    pub fn is_business_rule(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }

    /// Check if retrying the operation may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::TransientError(_))
    }
}
