//! Event comment entity - discussion and announcements attached to an event

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{CommentId, EventId, UserId};

/// Maximum comment length in characters
pub const MAX_COMMENT_LENGTH: usize = 1000;

/// Kind of comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CommentType {
    #[default]
    Comment,
    /// Only the event creator may post announcements
    Announcement,
}

impl CommentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Announcement => "announcement",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.to_ascii_lowercase().as_str() {
            "comment" => Ok(Self::Comment),
            "announcement" => Ok(Self::Announcement),
            _ => Err(DomainError::ValidationError(format!(
                "Invalid comment type: {value}"
            ))),
        }
    }
}

impl fmt::Display for CommentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Event comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventComment {
    pub id: CommentId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub content: String,
    pub comment_type: CommentType,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

impl EventComment {
    pub fn new(event_id: EventId, user_id: UserId, content: String, comment_type: CommentType) -> Self {
        Self {
            id: CommentId::new(),
            event_id,
            user_id,
            content,
            comment_type,
            created_at: Utc::now(),
            updated_at: None,
            is_deleted: false,
        }
    }

    /// Validate content length and emptiness
    pub fn validate_content(content: &str) -> Result<(), DomainError> {
        if content.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Content is required".to_string(),
            ));
        }
        if content.chars().count() > MAX_COMMENT_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: MAX_COMMENT_LENGTH,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Some(Utc::now());
    }
}
