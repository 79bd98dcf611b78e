//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod categories;
pub mod comments;
pub mod events;
pub mod health;
pub mod invites;
pub mod saved_invitees;
pub mod users;
