//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and typed parameters.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::AuthUser;
pub use path::IdPath;
pub use query::{
    CommentListParams, EventListParams, HiddenEventParams, InviteListParams, QueryParams,
};
pub use validated::ValidatedJson;
