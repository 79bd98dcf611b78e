//! Domain entities - core business objects

mod category;
mod comment;
mod event;
mod invite;
mod saved_invitee;
mod user;

pub use category::{Category, NewCategory};
pub use comment::{CommentType, EventComment, MAX_COMMENT_LENGTH};
pub use event::{Event, EventChanges};
pub use invite::{Invite, InviteStatus};
pub use saved_invitee::SavedInvitee;
pub use user::User;
