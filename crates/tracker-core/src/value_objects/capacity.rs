//! Capacity arithmetic used by the admission controller
//!
//! The storage layer is responsible for making the read-sum-then-write atomic;
//! everything here is pure so the rules can be tested without a database.

use crate::error::DomainError;
use crate::value_objects::EventId;

/// Capacity limit of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityLimit {
    Unlimited,
    Limited(i32),
}

impl CapacityLimit {
    /// A missing or non-positive maximum means the event is unlimited
    pub fn from_max(max_capacity: Option<i32>) -> Self {
        match max_capacity {
            Some(max) if max > 0 => Self::Limited(max),
            _ => Self::Unlimited,
        }
    }

    #[inline]
    pub fn is_unlimited(self) -> bool {
        matches!(self, Self::Unlimited)
    }
}

/// Participant count an accept will consume.
///
/// The override wins when present, otherwise the invite's stored count is used.
/// Anything below one is floored to one.
pub fn resolve_participant_count(override_count: Option<i32>, existing: i32) -> i32 {
    let requested = override_count.unwrap_or(existing);
    requested.max(1)
}

/// Decide whether `requested` participants fit next to `accepted_by_others`.
///
/// `accepted_by_others` must exclude the invite being accepted so that
/// re-accepting an already accepted invite does not count it twice.
pub fn check_admission(
    max_capacity: Option<i32>,
    accepted_by_others: i64,
    requested: i32,
) -> Result<(), DomainError> {
    let CapacityLimit::Limited(max) = CapacityLimit::from_max(max_capacity) else {
        return Ok(());
    };

    let available = i64::from(max) - accepted_by_others;
    if available < i64::from(requested) {
        return Err(DomainError::CapacityExceeded {
            available: available.max(0),
        });
    }
    Ok(())
}

/// Advisory view of an event's capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacitySnapshot {
    pub event_id: EventId,
    /// Configured maximum, 0 when unset
    pub max_capacity: i32,
    pub accepted_participants: i64,
    pub available_spaces: i64,
}

impl CapacitySnapshot {
    pub fn new(event_id: EventId, max_capacity: Option<i32>, accepted_participants: i64) -> Self {
        let max_capacity = max_capacity.unwrap_or(0);
        Self {
            event_id,
            max_capacity,
            accepted_participants,
            available_spaces: (i64::from(max_capacity) - accepted_participants).max(0),
        }
    }
}
