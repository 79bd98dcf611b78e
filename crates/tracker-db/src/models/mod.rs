//! Database models - SQLx-compatible structs for PostgreSQL tables

mod category;
mod comment;
mod event;
mod invite;
mod saved_invitee;
mod user;

pub use category::CategoryModel;
pub use comment::CommentModel;
pub use event::EventModel;
pub use invite::InviteModel;
pub use saved_invitee::SavedInviteeModel;
pub use user::UserModel;
