//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{categories, comments, events, health, invites, saved_invitees, users};
use crate::state::AppState;

/// Create the main API router (health routes are merged separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes, kept outside the rate limiter
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(invite_routes())
        .merge(event_routes())
        .merge(comment_routes())
        .merge(category_routes())
        .merge(user_routes())
        .merge(saved_invitee_routes())
}

/// Invite routes
fn invite_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/invites",
            get(invites::list_invites).post(invites::create_invite),
        )
        .route(
            "/invites/:invite_id",
            get(invites::get_invite).delete(invites::delete_invite),
        )
        .route("/invites/:invite_id/status", put(invites::update_invite_status))
}

/// Event routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events).post(events::create_event))
        .route("/events/hidden", get(events::list_hidden_events))
        .route(
            "/events/:event_id",
            get(events::get_event).put(events::update_event),
        )
        .route("/events/:event_id/status", patch(events::update_event_status))
        .route(
            "/events/:event_id/visibility",
            patch(events::update_event_visibility),
        )
        .route("/events/:event_id/capacity", get(events::get_capacity))
        .route("/events/:event_id/comments", get(comments::list_comments))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", post(comments::create_comment))
        .route(
            "/comments/:comment_id",
            put(comments::update_comment).delete(comments::delete_comment),
        )
}

/// Category routes
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route("/categories/active", get(categories::list_active_categories))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id/invites", get(invites::list_user_invites))
        .route(
            "/users/:user_id/invites/pending",
            get(invites::list_pending_user_invites),
        )
}

/// Saved invitee routes
fn saved_invitee_routes() -> Router<AppState> {
    Router::new()
        .route("/saved-invitees", post(saved_invitees::add_saved_invitee))
        .route(
            "/saved-invitees/:owner_user_id",
            get(saved_invitees::list_saved_invitees),
        )
        .route(
            "/saved-invitees/:owner_user_id/:saved_user_id",
            delete(saved_invitees::remove_saved_invitee),
        )
}
