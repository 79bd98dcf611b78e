//! Value objects - immutable types that represent domain concepts

mod capacity;
mod ids;

pub use capacity::{check_admission, resolve_participant_count, CapacityLimit, CapacitySnapshot};
pub use ids::{CategoryId, CommentId, EventId, IdParseError, InviteId, UserId};
