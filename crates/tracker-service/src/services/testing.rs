//! In-memory repositories for service tests
//!
//! One `parking_lot::Mutex` guards the whole store, so every accept runs its
//! read-sum-check-write inside a single critical section, the same guarantee
//! the Postgres implementation gets from the event row lock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tracker_common::AdmissionConfig;
use tracker_core::traits::{
    CategoryRepository, CommentRepository, EventQuery, EventRepository, InviteQuery,
    InviteRepository, RepoResult, SavedInviteeRepository, UserRepository,
};
use tracker_core::{
    check_admission, resolve_participant_count, Category, CategoryId, CommentId, CommentType,
    DomainError, Event, EventChanges, EventComment, EventId, Invite, InviteId, InviteStatus,
    NewCategory, SavedInvitee, User, UserId,
};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    users: HashMap<UserId, User>,
    categories: Vec<Category>,
    events: HashMap<EventId, Event>,
    invites: HashMap<InviteId, Invite>,
    comments: HashMap<CommentId, EventComment>,
    saved_invitees: Vec<SavedInvitee>,
    /// Number of upcoming accepts that fail with `TransientError`
    transient_failures: u32,
    accept_calls: u32,
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn context(self: &Arc<Self>) -> ServiceContext {
        self.context_with(AdmissionConfig {
            max_attempts: 3,
            retry_backoff_ms: 1,
            lock_timeout_ms: 1000,
        })
    }

    pub fn context_with(self: &Arc<Self>, admission: AdmissionConfig) -> ServiceContext {
        ServiceContextBuilder::new()
            .user_repo(self.clone())
            .category_repo(self.clone())
            .event_repo(self.clone())
            .invite_repo(self.clone())
            .comment_repo(self.clone())
            .saved_invitee_repo(self.clone())
            .admission(admission)
            .build()
            .expect("all repositories provided")
    }

    pub fn fail_next_accepts(&self, count: u32) {
        self.state.lock().transient_failures = count;
    }

    pub fn accept_calls(&self) -> u32 {
        self.state.lock().accept_calls
    }

    pub fn add_user(&self, name: &str) -> User {
        let user = User::new(name.to_string(), format!("{}@example.com", name.to_lowercase()));
        self.state.lock().users.insert(user.id, user.clone());
        user
    }

    pub fn add_event(&self, owner: UserId, max_capacity: Option<i32>) -> Event {
        let event = Event::new("Test event".to_string(), Utc::now(), owner)
            .with_max_capacity(max_capacity);
        self.state.lock().events.insert(event.id, event.clone());
        event
    }

    pub fn add_invite(&self, event_id: EventId, user_id: UserId, participant_count: i32) -> Invite {
        let invite = Invite::new(event_id, user_id).with_participant_count(participant_count);
        self.state.lock().invites.insert(invite.id, invite.clone());
        invite
    }

    pub fn invite(&self, id: InviteId) -> Option<Invite> {
        self.state.lock().invites.get(&id).cloned()
    }

    pub fn accepted_sum(&self, event_id: EventId) -> i64 {
        accepted_sum(&self.state.lock(), event_id, None)
    }
}

impl MemoryStore {
    fn modify_event(&self, id: EventId, change: impl FnOnce(&mut Event)) -> RepoResult<Event> {
        let mut state = self.state.lock();
        let event = state
            .events
            .get_mut(&id)
            .ok_or(DomainError::EventNotFound(id))?;
        change(event);
        event.touch();
        Ok(event.clone())
    }
}

fn accepted_sum(state: &State, event_id: EventId, excluding: Option<InviteId>) -> i64 {
    state
        .invites
        .values()
        .filter(|i| i.event_id == event_id && i.is_accepted() && Some(i.id) != excluding)
        .map(|i| i64::from(i.participant_count))
        .sum()
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.state.lock().users.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> RepoResult<Vec<User>> {
        let state = self.state.lock();
        Ok(ids.iter().filter_map(|id| state.users.get(id).cloned()).collect())
    }

    async fn exists(&self, id: UserId) -> RepoResult<bool> {
        Ok(self.state.lock().users.contains_key(&id))
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.users.values().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        state.users.insert(user.id, user.clone());
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        Ok(self.state.lock().categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self, active_only: bool) -> RepoResult<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .state
            .lock()
            .categories
            .iter()
            .filter(|c| !active_only || c.is_active)
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn create(&self, category: NewCategory) -> RepoResult<Category> {
        let mut state = self.state.lock();
        let id = state.categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let category = Category {
            id,
            name: category.name,
            description: category.description,
            color: category.color,
            icon: category.icon,
            is_active: category.is_active,
        };
        state.categories.push(category.clone());
        Ok(category)
    }
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        Ok(self.state.lock().events.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[EventId]) -> RepoResult<Vec<Event>> {
        let state = self.state.lock();
        Ok(ids.iter().filter_map(|id| state.events.get(id).cloned()).collect())
    }

    async fn find(&self, query: EventQuery) -> RepoResult<Vec<Event>> {
        let mut events: Vec<Event> = self
            .state
            .lock()
            .events
            .values()
            .filter(|e| query.created_by.map_or(true, |owner| e.created_by == owner))
            .filter(|e| query.visible.map_or(true, |visible| e.is_visible == visible))
            .filter(|e| query.search.as_deref().map_or(true, |term| e.matches_search(term)))
            .cloned()
            .collect();
        events.sort_by_key(|e| e.start_date_time);
        Ok(events)
    }

    async fn exists(&self, id: EventId) -> RepoResult<bool> {
        Ok(self.state.lock().events.contains_key(&id))
    }

    async fn create(&self, event: &Event) -> RepoResult<()> {
        self.state.lock().events.insert(event.id, event.clone());
        Ok(())
    }

    async fn update(&self, id: EventId, changes: &EventChanges) -> RepoResult<Event> {
        self.modify_event(id, |event| event.apply(changes.clone()))
    }

    async fn set_status(
        &self,
        id: EventId,
        is_cancelled: Option<bool>,
        is_completed: Option<bool>,
    ) -> RepoResult<Event> {
        self.modify_event(id, |event| {
            if let Some(cancelled) = is_cancelled {
                event.is_cancelled = cancelled;
            }
            if let Some(completed) = is_completed {
                event.is_completed = completed;
            }
        })
    }

    async fn set_visibility(&self, id: EventId, is_visible: bool) -> RepoResult<Event> {
        self.modify_event(id, |event| event.is_visible = is_visible)
    }
}

#[async_trait]
impl InviteRepository for MemoryStore {
    async fn find_by_id(&self, id: InviteId) -> RepoResult<Option<Invite>> {
        Ok(self.state.lock().invites.get(&id).cloned())
    }

    async fn find(&self, query: InviteQuery) -> RepoResult<Vec<Invite>> {
        let mut invites: Vec<Invite> = self
            .state
            .lock()
            .invites
            .values()
            .filter(|i| query.user_id.map_or(true, |u| i.invited_user_id == u))
            .filter(|i| query.event_id.map_or(true, |e| i.event_id == e))
            .filter(|i| query.status.map_or(true, |s| i.status == s))
            .cloned()
            .collect();
        invites.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(invites)
    }

    async fn exists_for(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool> {
        Ok(self
            .state
            .lock()
            .invites
            .values()
            .any(|i| i.event_id == event_id && i.invited_user_id == user_id))
    }

    async fn create(&self, invite: &Invite) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state
            .invites
            .values()
            .any(|i| i.event_id == invite.event_id && i.invited_user_id == invite.invited_user_id)
        {
            return Err(DomainError::DuplicateInvite);
        }
        state.invites.insert(invite.id, invite.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        id: InviteId,
        status: InviteStatus,
        participant_count: Option<i32>,
    ) -> RepoResult<Invite> {
        if status == InviteStatus::Accepted {
            return self.accept_within_capacity(id, participant_count).await;
        }
        let mut state = self.state.lock();
        let invite = state
            .invites
            .get_mut(&id)
            .ok_or(DomainError::InviteNotFound(id))?;
        invite.status = status;
        if let Some(count) = participant_count {
            invite.participant_count = count.max(1);
        }
        invite.updated_at = Some(Utc::now());
        Ok(invite.clone())
    }

    async fn accept_within_capacity(
        &self,
        id: InviteId,
        participant_count: Option<i32>,
    ) -> RepoResult<Invite> {
        let mut state = self.state.lock();
        state.accept_calls += 1;
        if state.transient_failures > 0 {
            state.transient_failures -= 1;
            return Err(DomainError::TransientError(
                "canceling statement due to lock timeout".to_string(),
            ));
        }

        let invite = state
            .invites
            .get(&id)
            .cloned()
            .ok_or(DomainError::InviteNotFound(id))?;
        let max_capacity = state
            .events
            .get(&invite.event_id)
            .ok_or(DomainError::EventNotFound(invite.event_id))?
            .max_capacity;

        let requested = resolve_participant_count(participant_count, invite.participant_count);
        let others = accepted_sum(&state, invite.event_id, Some(id));
        check_admission(max_capacity, others, requested)?;

        let slot = state
            .invites
            .get_mut(&id)
            .ok_or(DomainError::InviteNotFound(id))?;
        slot.status = InviteStatus::Accepted;
        slot.participant_count = requested;
        slot.updated_at = Some(Utc::now());
        Ok(slot.clone())
    }

    async fn accepted_participants(&self, event_id: EventId) -> RepoResult<i64> {
        Ok(accepted_sum(&self.state.lock(), event_id, None))
    }

    async fn delete(&self, id: InviteId) -> RepoResult<()> {
        self.state
            .lock()
            .invites
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::InviteNotFound(id))
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<EventComment>> {
        Ok(self
            .state
            .lock()
            .comments
            .get(&id)
            .filter(|c| !c.is_deleted)
            .cloned())
    }

    async fn find_by_event(
        &self,
        event_id: EventId,
        comment_type: Option<CommentType>,
    ) -> RepoResult<Vec<EventComment>> {
        let mut comments: Vec<EventComment> = self
            .state
            .lock()
            .comments
            .values()
            .filter(|c| c.event_id == event_id && !c.is_deleted)
            .filter(|c| comment_type.map_or(true, |t| c.comment_type == t))
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    async fn create(&self, comment: &EventComment) -> RepoResult<()> {
        self.state.lock().comments.insert(comment.id, comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &EventComment) -> RepoResult<()> {
        let mut state = self.state.lock();
        let slot = state
            .comments
            .get_mut(&comment.id)
            .filter(|c| !c.is_deleted)
            .ok_or(DomainError::CommentNotFound(comment.id))?;
        slot.content.clone_from(&comment.content);
        slot.updated_at = comment.updated_at;
        Ok(())
    }

    async fn delete(&self, id: CommentId) -> RepoResult<()> {
        let mut state = self.state.lock();
        let slot = state
            .comments
            .get_mut(&id)
            .filter(|c| !c.is_deleted)
            .ok_or(DomainError::CommentNotFound(id))?;
        slot.is_deleted = true;
        Ok(())
    }
}

#[async_trait]
impl SavedInviteeRepository for MemoryStore {
    async fn find_by_owner(&self, owner: UserId) -> RepoResult<Vec<SavedInvitee>> {
        Ok(self
            .state
            .lock()
            .saved_invitees
            .iter()
            .filter(|s| s.owner_user_id == owner)
            .cloned()
            .collect())
    }

    async fn exists(&self, owner: UserId, saved: UserId) -> RepoResult<bool> {
        Ok(self
            .state
            .lock()
            .saved_invitees
            .iter()
            .any(|s| s.owner_user_id == owner && s.saved_user_id == saved))
    }

    async fn create(&self, entry: &SavedInvitee) -> RepoResult<()> {
        let mut state = self.state.lock();
        let taken = state.saved_invitees.iter().any(|s| {
            s.owner_user_id == entry.owner_user_id && s.saved_user_id == entry.saved_user_id
        });
        if taken {
            return Err(DomainError::DuplicateSavedInvitee);
        }
        state.saved_invitees.push(entry.clone());
        Ok(())
    }

    async fn delete(&self, owner: UserId, saved: UserId) -> RepoResult<()> {
        let mut state = self.state.lock();
        let before = state.saved_invitees.len();
        state
            .saved_invitees
            .retain(|s| !(s.owner_user_id == owner && s.saved_user_id == saved));
        if state.saved_invitees.len() == before {
            return Err(DomainError::SavedInviteeNotFound);
        }
        Ok(())
    }
}
