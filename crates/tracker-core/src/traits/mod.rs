//! Repository traits

mod repositories;

pub use repositories::{
    CategoryRepository, CommentRepository, EventQuery, EventRepository, InviteQuery,
    InviteRepository, RepoResult, SavedInviteeRepository, UserRepository,
};
