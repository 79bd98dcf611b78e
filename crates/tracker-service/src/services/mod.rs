//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and is cheap to build
//! per request.

pub mod admission;
pub mod category;
pub mod comment;
pub mod context;
pub mod error;
pub mod event;
pub mod invite;
pub mod saved_invitee;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use admission::AdmissionService;
pub use category::CategoryService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use invite::InviteService;
pub use saved_invitee::SavedInviteeService;
pub use user::UserService;
