//! # tracker-core
//!
//! Domain layer containing entities, value objects, capacity admission rules,
//! and repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Category, CommentType, Event, EventChanges, EventComment, Invite, InviteStatus, NewCategory,
    SavedInvitee, User, MAX_COMMENT_LENGTH,
};
pub use error::DomainError;
pub use traits::{
    CategoryRepository, CommentRepository, EventQuery, EventRepository, InviteQuery,
    InviteRepository, RepoResult, SavedInviteeRepository, UserRepository,
};
pub use value_objects::{
    check_admission, resolve_participant_count, CapacityLimit, CapacitySnapshot, CategoryId,
    CommentId, EventId, IdParseError, InviteId, UserId,
};
