//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in tracker-core.
//! Each repository handles database operations for a specific domain entity.

mod category;
mod comment;
mod error;
mod event;
mod invite;
mod saved_invitee;
mod user;

pub use category::PgCategoryRepository;
pub use comment::PgCommentRepository;
pub use error::{is_transient, map_db_error};
pub use event::PgEventRepository;
pub use invite::PgInviteRepository;
pub use saved_invitee::PgSavedInviteeRepository;
pub use user::PgUserRepository;
