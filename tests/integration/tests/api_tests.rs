//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use futures::future::join_all;
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

const MISSING_ID: &str = "00000000-0000-4000-8000-000000000000";

/// Create an event owned by a fresh user, returning the server, the owner's
/// token and the event
async fn event_with_capacity(max_capacity: Option<i32>) -> (TestServer, String, EventResponse) {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.create_user("Owner").await.unwrap();

    let response = server
        .post_auth("/api/v1/events", &token, &CreateEventRequest::with_capacity(max_capacity))
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    (server, token, event)
}

/// Invite a fresh guest to the event
async fn invite_guest(server: &TestServer, token: &str, event_id: &str) -> (InviteResponse, String) {
    let (guest, guest_token) = server.create_user("Guest").await.unwrap();
    let response = server
        .post_auth(
            "/api/v1/invites",
            token,
            &CreateInviteRequest::new(event_id, guest.id),
        )
        .await
        .unwrap();
    let invite: InviteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    (invite, guest_token)
}

async fn capacity(server: &TestServer, event_id: &str) -> CapacityResponse {
    let response = server
        .get(&format!("/api/v1/events/{event_id}/capacity"))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Invite Tests
// ============================================================================

#[tokio::test]
async fn test_create_invite_starts_pending() {
    if !check_test_env().await {
        return;
    }

    let (server, token, event) = event_with_capacity(Some(5)).await;
    let (invite, _) = invite_guest(&server, &token, &event.id).await;

    assert_eq!(invite.status, "Pending");
    assert_eq!(invite.participant_count, 1);
    assert_eq!(invite.event.as_ref().unwrap().id, event.id);
    assert!(invite.invited_user.is_some());

    let snapshot = capacity(&server, &event.id).await;
    assert_eq!(snapshot.accepted_participants, 0);
    assert_eq!(snapshot.available_spaces, 5);
}

#[tokio::test]
async fn test_create_invite_bad_references() {
    if !check_test_env().await {
        return;
    }

    let (server, token, event) = event_with_capacity(None).await;

    let response = server
        .post_auth(
            "/api/v1/invites",
            &token,
            &CreateInviteRequest::new(MISSING_ID, MISSING_ID),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "UNKNOWN_EVENT");

    let response = server
        .post_auth(
            "/api/v1/invites",
            &token,
            &CreateInviteRequest::new(&event.id, MISSING_ID),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "UNKNOWN_USER");
}

#[tokio::test]
async fn test_duplicate_invite_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let (server, token, event) = event_with_capacity(None).await;
    let (invite, _) = invite_guest(&server, &token, &event.id).await;

    let response = server
        .post_auth(
            "/api/v1/invites",
            &token,
            &CreateInviteRequest::new(&event.id, &invite.invited_user_id),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "DUPLICATE_INVITE");
}

#[tokio::test]
async fn test_accept_then_capacity_exceeded() {
    if !check_test_env().await {
        return;
    }

    let (server, token, event) = event_with_capacity(Some(10)).await;
    let (first, guest_token) = invite_guest(&server, &token, &event.id).await;
    let (second, _) = invite_guest(&server, &token, &event.id).await;

    let response = server
        .put_auth(
            &format!("/api/v1/invites/{}/status", first.id),
            &guest_token,
            &UpdateStatusRequest::accept(7),
        )
        .await
        .unwrap();
    let accepted: InviteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(accepted.status, "Accepted");
    assert_eq!(accepted.participant_count, 7);

    let response = server
        .put_auth(
            &format!("/api/v1/invites/{}/status", second.id),
            &guest_token,
            &UpdateStatusRequest::accept(4),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "CAPACITY_EXCEEDED");
    assert_eq!(body.message, "Capacity exceeded. Only 3 spaces available.");

    let response = server
        .put_auth(
            &format!("/api/v1/invites/{}/status", second.id),
            &guest_token,
            &UpdateStatusRequest::accept(3),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let snapshot = capacity(&server, &event.id).await;
    assert_eq!(snapshot.max_capacity, 10);
    assert_eq!(snapshot.accepted_participants, 10);
    assert_eq!(snapshot.available_spaces, 0);
}

#[tokio::test]
async fn test_status_is_case_insensitive_and_validated() {
    if !check_test_env().await {
        return;
    }

    let (server, token, event) = event_with_capacity(None).await;
    let (invite, guest_token) = invite_guest(&server, &token, &event.id).await;
    let path = format!("/api/v1/invites/{}/status", invite.id);

    let response = server
        .put_auth(&path, &guest_token, &UpdateStatusRequest::new("declined"))
        .await
        .unwrap();
    let declined: InviteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(declined.status, "Declined");

    let response = server
        .put_auth(&path, &guest_token, &UpdateStatusRequest::new("perhaps"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "INVALID_STATUS");
}

#[tokio::test]
async fn test_status_of_missing_invite() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.create_user("Guest").await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/invites/{MISSING_ID}/status"),
            &token,
            &UpdateStatusRequest::new("Accepted"),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.code, "UNKNOWN_INVITE");
}

#[tokio::test]
async fn test_status_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/invites",
            &CreateInviteRequest::new(MISSING_ID, MISSING_ID),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_delete_invite() {
    if !check_test_env().await {
        return;
    }

    let (server, token, event) = event_with_capacity(None).await;
    let (invite, _) = invite_guest(&server, &token, &event.id).await;
    let path = format!("/api/v1/invites/{}", invite.id);

    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_pending_invites_for_user() {
    if !check_test_env().await {
        return;
    }

    let (server, token, event) = event_with_capacity(None).await;
    let (invite, guest_token) = invite_guest(&server, &token, &event.id).await;
    let path = format!("/api/v1/users/{}/invites/pending", invite.invited_user_id);

    let response = server.get(&path).await.unwrap();
    let pending: Vec<InviteResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(pending.len(), 1);

    let response = server
        .put_auth(
            &format!("/api/v1/invites/{}/status", invite.id),
            &guest_token,
            &UpdateStatusRequest::new("Accepted"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&path).await.unwrap();
    let pending: Vec<InviteResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(pending.is_empty());
}

#[tokio::test]
async fn test_concurrent_accepts_never_overbook() {
    if !check_test_env().await {
        return;
    }

    let (server, token, event) = event_with_capacity(Some(5)).await;

    let mut invites = Vec::new();
    for _ in 0..12 {
        invites.push(invite_guest(&server, &token, &event.id).await);
    }

    let requests = invites.iter().map(|(invite, guest_token)| {
        let path = format!("/api/v1/invites/{}/status", invite.id);
        let server = &server;
        async move {
            server
                .put_auth(&path, guest_token, &UpdateStatusRequest::accept(1))
                .await
                .unwrap()
                .status()
        }
    });
    let statuses = join_all(requests).await;

    let accepted = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    let rejected = statuses
        .iter()
        .filter(|s| **s == StatusCode::BAD_REQUEST)
        .count();
    assert_eq!(accepted, 5);
    assert_eq!(rejected, 7);

    let snapshot = capacity(&server, &event.id).await;
    assert_eq!(snapshot.accepted_participants, 5);
    assert_eq!(snapshot.available_spaces, 0);
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_capacity_of_missing_event() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("/api/v1/events/{MISSING_ID}/capacity"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.code, "UNKNOWN_EVENT");
}

#[tokio::test]
async fn test_unlimited_event_capacity() {
    if !check_test_env().await {
        return;
    }

    let (server, _, event) = event_with_capacity(None).await;
    let snapshot = capacity(&server, &event.id).await;
    assert_eq!(snapshot.max_capacity, 0);
    assert_eq!(snapshot.available_spaces, 0);
}

#[tokio::test]
async fn test_hidden_events_listing() {
    if !check_test_env().await {
        return;
    }

    let (server, token, event) = event_with_capacity(None).await;
    let path = format!("/api/v1/events/{}/visibility", event.id);

    let response = server
        .patch_auth(&path, &token, &serde_json::json!({ "isVisible": false }))
        .await
        .unwrap();
    let hidden: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!hidden.is_visible);

    let response = server
        .get(&format!("/api/v1/events/hidden?userId={}", event.created_by))
        .await
        .unwrap();
    let listed: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().any(|e| e.id == event.id));

    let (_, stranger) = server.create_user("Stranger").await.unwrap();
    let response = server
        .patch_auth(&path, &stranger, &serde_json::json!({ "isVisible": true }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_status_and_visibility_patches() {
    if !check_test_env().await {
        return;
    }

    let (server, token, event) = event_with_capacity(None).await;
    let status_path = format!("/api/v1/events/{}/status", event.id);
    let visibility_path = format!("/api/v1/events/{}/visibility", event.id);
    let status_body = serde_json::json!({ "isCancelled": true });
    let visibility_body = serde_json::json!({ "isVisible": false });

    let (status, visibility) = tokio::join!(
        server.patch_auth(&status_path, &token, &status_body),
        server.patch_auth(&visibility_path, &token, &visibility_body),
    );
    assert_status(status.unwrap(), StatusCode::OK).await.unwrap();
    assert_status(visibility.unwrap(), StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/v1/events/{}", event.id))
        .await
        .unwrap();
    let stored: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(stored.is_cancelled);
    assert!(!stored.is_visible);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_thread() {
    if !check_test_env().await {
        return;
    }

    let (server, token, event) = event_with_capacity(None).await;
    let request = CreateCommentRequest {
        event_id: event.id.clone(),
        content: "See you there".to_string(),
        comment_type: Some("announcement".to_string()),
    };

    let response = server.post_auth("/api/v1/comments", &token, &request).await.unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.comment_type, "announcement");

    let response = server
        .get(&format!("/api/v1/events/{}/comments", event.id))
        .await
        .unwrap();
    let thread: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(thread.len(), 1);

    let response = server
        .delete_auth(&format!("/api/v1/comments/{}", comment.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Saved Invitee Tests
// ============================================================================

#[tokio::test]
async fn test_saved_invitee_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, token) = server.create_user("Owner").await.unwrap();
    let (friend, _) = server.create_user("Friend").await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/saved-invitees",
            &token,
            &CreateSavedInviteeRequest::new(owner.id, friend.id),
        )
        .await
        .unwrap();
    let added: SavedInviteeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(added.saved_user_id, friend.id.to_string());
    assert_eq!(added.saved_user.unwrap().name, friend.name);

    let response = server
        .get(&format!("/api/v1/saved-invitees/{}", owner.id))
        .await
        .unwrap();
    let listed: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, friend.id.to_string());

    let path = format!("/api/v1/saved-invitees/{}/{}", owner.id, friend.id);
    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_saved_invitee_rejections() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, token) = server.create_user("Owner").await.unwrap();
    let (friend, _) = server.create_user("Friend").await.unwrap();

    let cases = [
        (CreateSavedInviteeRequest::new(owner.id, owner.id), "CANNOT_SAVE_SELF"),
        (CreateSavedInviteeRequest::new(owner.id, MISSING_ID), "UNKNOWN_USER"),
    ];
    for (request, code) in cases {
        let response = server
            .post_auth("/api/v1/saved-invitees", &token, &request)
            .await
            .unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.code, code);
    }

    let request = CreateSavedInviteeRequest::new(owner.id, friend.id);
    let response = server
        .post_auth("/api/v1/saved-invitees", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    let response = server
        .post_auth("/api/v1/saved-invitees", &token, &request)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "DUPLICATE_SAVED_INVITEE");

    let response = server
        .get(&format!("/api/v1/saved-invitees/{MISSING_ID}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
