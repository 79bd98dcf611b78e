//! # tracker-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `tracker-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, including the lock-protected accept path
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tracker_db::pool::{create_pool, PoolConfig};
//! use tracker_db::repositories::PgInviteRepository;
//! use tracker_core::traits::InviteRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     let invites = PgInviteRepository::new(pool);
//!
//!     let accepted = invites.accepted_participants(event_id).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgCategoryRepository, PgCommentRepository, PgEventRepository, PgInviteRepository,
    PgSavedInviteeRepository, PgUserRepository,
};
