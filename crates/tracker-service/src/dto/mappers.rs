//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use tracker_core::{Category, CapacitySnapshot, Event, EventComment, Invite, SavedInvitee, User};

use super::responses::{
    CapacityResponse, CategoryResponse, CommentResponse, EventResponse, InviteResponse,
    SavedInviteeResponse, UserResponse,
};

// ============================================================================
// Helper structs for composite responses
// ============================================================================

/// Event with explicitly loaded relations
#[derive(Debug, Clone)]
pub struct EventWithDetails {
    pub event: Event,
    pub category: Option<Category>,
    pub creator: Option<User>,
}

/// Invite with explicitly loaded relations
#[derive(Debug, Clone)]
pub struct InviteWithDetails {
    pub invite: Invite,
    pub event: Option<EventWithDetails>,
    pub invitee: Option<User>,
}

#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: EventComment,
    pub author: Option<User>,
}

// ============================================================================
// User / Category Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            date_of_birth: user.date_of_birth,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<SavedInvitee> for SavedInviteeResponse {
    fn from(entry: SavedInvitee) -> Self {
        Self {
            owner_user_id: entry.owner_user_id,
            saved_user_id: entry.saved_user_id,
            created_at: entry.created_at,
            saved_user: None,
        }
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            color: category.color,
            icon: category.icon,
            is_active: category.is_active,
        }
    }
}

// ============================================================================
// Event Mappers
// ============================================================================

impl From<EventWithDetails> for EventResponse {
    fn from(details: EventWithDetails) -> Self {
        let EventWithDetails {
            event,
            category,
            creator,
        } = details;

        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            start_date_time: event.start_date_time,
            end_date_time: event.end_date_time,
            address: event.address,
            category_id: event.category_id,
            category: category.map(CategoryResponse::from),
            event_type: event.event_type,
            max_capacity: event.max_capacity,
            is_cancelled: event.is_cancelled,
            is_completed: event.is_completed,
            is_visible: event.is_visible,
            created_by: event.created_by,
            creator: creator.map(UserResponse::from),
            parent_event_id: event.parent_event_id,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self::from(EventWithDetails {
            event,
            category: None,
            creator: None,
        })
    }
}

impl From<CapacitySnapshot> for CapacityResponse {
    fn from(snapshot: CapacitySnapshot) -> Self {
        Self {
            event_id: snapshot.event_id,
            max_capacity: snapshot.max_capacity,
            accepted_participants: snapshot.accepted_participants,
            available_spaces: snapshot.available_spaces,
        }
    }
}

// ============================================================================
// Invite Mappers
// ============================================================================

impl From<InviteWithDetails> for InviteResponse {
    fn from(details: InviteWithDetails) -> Self {
        let InviteWithDetails {
            invite,
            event,
            invitee,
        } = details;

        Self {
            id: invite.id,
            event_id: invite.event_id,
            invited_user_id: invite.invited_user_id,
            status: invite.status,
            participant_count: invite.participant_count,
            created_at: invite.created_at,
            updated_at: invite.updated_at,
            event: event.map(EventResponse::from),
            invited_user: invitee.map(UserResponse::from),
        }
    }
}

impl From<Invite> for InviteResponse {
    fn from(invite: Invite) -> Self {
        Self::from(InviteWithDetails {
            invite,
            event: None,
            invitee: None,
        })
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<CommentWithAuthor> for CommentResponse {
    fn from(value: CommentWithAuthor) -> Self {
        let CommentWithAuthor { comment, author } = value;
        Self {
            id: comment.id,
            event_id: comment.event_id,
            user_id: comment.user_id,
            content: comment.content,
            comment_type: comment.comment_type,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            author: author.map(UserResponse::from),
        }
    }
}
