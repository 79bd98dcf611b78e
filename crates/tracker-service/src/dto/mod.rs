//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreateInviteRequest, CreateSavedInviteeRequest, EventRequest,
    UpdateCommentRequest, UpdateEventStatusRequest, UpdateEventVisibilityRequest,
    UpdateInviteStatusRequest,
};

pub use responses::{
    CapacityResponse, CategoryResponse, CommentResponse, EventResponse, HealthChecks,
    HealthResponse, InviteResponse, ReadinessResponse, SavedInviteeResponse, UserResponse,
};

pub use mappers::{CommentWithAuthor, EventWithDetails, InviteWithDetails};
