//! # tracker-service
//!
//! Application layer containing the admission controller, business logic,
//! and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CapacityResponse, CategoryResponse, CommentResponse, CreateCommentRequest,
    CreateInviteRequest, CreateSavedInviteeRequest, EventRequest, EventResponse, HealthResponse,
    InviteResponse, ReadinessResponse, SavedInviteeResponse, UpdateCommentRequest,
    UpdateEventStatusRequest, UpdateEventVisibilityRequest, UpdateInviteStatusRequest,
    UserResponse,
};
pub use services::{
    AdmissionService, CategoryService, CommentService, EventService, InviteService,
    SavedInviteeService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    UserService,
};
