//! Entity to model mappers
//!
//! Conversions from database rows (`models`) to domain entities
//! (`tracker-core`). Rows holding enum columns use `TryFrom` since the text
//! value has to be parsed.

mod category;
mod comment;
mod event;
mod invite;
mod saved_invitee;
mod user;

pub use invite::invites_from_models;
