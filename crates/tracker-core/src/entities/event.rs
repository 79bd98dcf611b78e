//! Event entity - a scheduled happening owned by its creator

use chrono::{DateTime, Utc};

use crate::value_objects::{CapacityLimit, CategoryId, EventId, UserId};

/// Event entity
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: Option<DateTime<Utc>>,
    pub address: Option<String>,
    pub category_id: Option<CategoryId>,
    pub event_type: Option<String>,
    /// `None` or a non-positive value means unlimited
    pub max_capacity: Option<i32>,
    pub is_cancelled: bool,
    pub is_completed: bool,
    pub is_visible: bool,
    pub created_by: UserId,
    pub parent_event_id: Option<EventId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Editable fields of an event, as written by a full update
#[derive(Debug, Clone, PartialEq)]
pub struct EventChanges {
    pub title: String,
    pub description: Option<String>,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: Option<DateTime<Utc>>,
    pub address: Option<String>,
    pub category_id: Option<CategoryId>,
    pub event_type: Option<String>,
    pub max_capacity: Option<i32>,
    pub parent_event_id: Option<EventId>,
    /// `None` keeps the stored flag
    pub is_visible: Option<bool>,
}

impl Event {
    /// Create a new visible event owned by `created_by`
    pub fn new(title: String, start_date_time: DateTime<Utc>, created_by: UserId) -> Self {
        Self {
            id: EventId::new(),
            title,
            description: None,
            start_date_time,
            end_date_time: None,
            address: None,
            category_id: None,
            event_type: None,
            max_capacity: None,
            is_cancelled: false,
            is_completed: false,
            is_visible: true,
            created_by,
            parent_event_id: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn with_max_capacity(mut self, max_capacity: Option<i32>) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = category_id;
        self
    }

    #[inline]
    pub fn capacity_limit(&self) -> CapacityLimit {
        CapacityLimit::from_max(self.max_capacity)
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.created_by == user_id
    }

    /// Case-insensitive substring match over title and description
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }

    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    /// Overwrite the editable fields. Status flags are left alone.
    pub fn apply(&mut self, changes: EventChanges) {
        self.title = changes.title;
        self.description = changes.description;
        self.start_date_time = changes.start_date_time;
        self.end_date_time = changes.end_date_time;
        self.address = changes.address;
        self.category_id = changes.category_id;
        self.event_type = changes.event_type;
        self.max_capacity = changes.max_capacity;
        self.parent_event_id = changes.parent_event_id;
        if let Some(visible) = changes.is_visible {
            self.is_visible = visible;
        }
    }
}
