//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Category, CommentType, Event, EventChanges, EventComment, Invite, InviteStatus, NewCategory,
    SavedInvitee, User,
};
use crate::error::DomainError;
use crate::value_objects::{CategoryId, CommentId, EventId, InviteId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Batch lookup, missing IDs are silently skipped
    async fn find_by_ids(&self, ids: &[UserId]) -> RepoResult<Vec<User>>;

    /// Check if a user exists
    async fn exists(&self, id: UserId) -> RepoResult<bool>;

    /// Create a new user (provisioning)
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by ID
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>>;

    /// List categories ordered by name, optionally only active ones
    async fn find_all(&self, active_only: bool) -> RepoResult<Vec<Category>>;

    /// Insert a category and return it with its assigned key
    async fn create(&self, category: NewCategory) -> RepoResult<Category>;
}

// ============================================================================
// Event Repository
// ============================================================================

/// Filter for event listings
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub created_by: Option<UserId>,
    /// Case-insensitive match on title or description
    pub search: Option<String>,
    pub visible: Option<bool>,
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>>;

    /// Batch lookup, missing IDs are silently skipped
    async fn find_by_ids(&self, ids: &[EventId]) -> RepoResult<Vec<Event>>;

    /// List events matching the filter, soonest first
    async fn find(&self, query: EventQuery) -> RepoResult<Vec<Event>>;

    /// Check if an event exists
    async fn exists(&self, id: EventId) -> RepoResult<bool>;

    /// Create a new event
    async fn create(&self, event: &Event) -> RepoResult<()>;

    /// Overwrite the editable fields of an event and return the stored row.
    ///
    /// Only the columns named by `EventChanges` are written, so a concurrent
    /// status or visibility change is never reverted by a stale copy.
    async fn update(&self, id: EventId, changes: &EventChanges) -> RepoResult<Event>;

    /// Set the cancelled and/or completed flags, leaving `None` flags as stored
    async fn set_status(
        &self,
        id: EventId,
        is_cancelled: Option<bool>,
        is_completed: Option<bool>,
    ) -> RepoResult<Event>;

    /// Set only the visibility flag
    async fn set_visibility(&self, id: EventId, is_visible: bool) -> RepoResult<Event>;
}

// ============================================================================
// Invite Repository
// ============================================================================

/// Filter for invite listings
#[derive(Debug, Clone, Copy, Default)]
pub struct InviteQuery {
    pub user_id: Option<UserId>,
    pub event_id: Option<EventId>,
    pub status: Option<InviteStatus>,
}

#[async_trait]
pub trait InviteRepository: Send + Sync {
    /// Find invite by ID
    async fn find_by_id(&self, id: InviteId) -> RepoResult<Option<Invite>>;

    /// List invites matching the filter, newest first
    async fn find(&self, query: InviteQuery) -> RepoResult<Vec<Invite>>;

    /// Check whether an invite exists for the (event, user) pair
    async fn exists_for(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool>;

    /// Create a new invite. Fails with `DuplicateInvite` if the pair is taken.
    async fn create(&self, invite: &Invite) -> RepoResult<()>;

    /// Apply a status that does not consume capacity.
    ///
    /// Passing `Accepted` routes to [`InviteRepository::accept_within_capacity`].
    async fn update_status(
        &self,
        id: InviteId,
        status: InviteStatus,
        participant_count: Option<i32>,
    ) -> RepoResult<Invite>;

    /// Accept an invite if the event has room for it.
    ///
    /// Implementations must hold a per-event exclusive lock across reading the
    /// accepted sum, checking it and writing the new status, so that concurrent
    /// accepts on the same event are linearized. On `CapacityExceeded` the
    /// invite is left untouched.
    async fn accept_within_capacity(
        &self,
        id: InviteId,
        participant_count: Option<i32>,
    ) -> RepoResult<Invite>;

    /// Sum of participant counts over accepted invites of an event
    async fn accepted_participants(&self, event_id: EventId) -> RepoResult<i64>;

    /// Delete an invite
    async fn delete(&self, id: InviteId) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a non-deleted comment by ID
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<EventComment>>;

    /// List non-deleted comments of an event, newest first
    async fn find_by_event(
        &self,
        event_id: EventId,
        comment_type: Option<CommentType>,
    ) -> RepoResult<Vec<EventComment>>;

    /// Create a new comment
    async fn create(&self, comment: &EventComment) -> RepoResult<()>;

    /// Update comment content
    async fn update(&self, comment: &EventComment) -> RepoResult<()>;

    /// Soft delete a comment
    async fn delete(&self, id: CommentId) -> RepoResult<()>;
}

// ============================================================================
// Saved Invitee Repository
// ============================================================================

#[async_trait]
pub trait SavedInviteeRepository: Send + Sync {
    /// Entries saved by `owner`, oldest first
    async fn find_by_owner(&self, owner: UserId) -> RepoResult<Vec<SavedInvitee>>;

    /// Check whether `saved` is on `owner`'s list
    async fn exists(&self, owner: UserId, saved: UserId) -> RepoResult<bool>;

    /// Add an entry. Fails with `DuplicateSavedInvitee` if the pair is taken.
    async fn create(&self, entry: &SavedInvitee) -> RepoResult<()>;

    /// Remove an entry. Fails with `SavedInviteeNotFound` if there is none.
    async fn delete(&self, owner: UserId, saved: UserId) -> RepoResult<()>;
}
