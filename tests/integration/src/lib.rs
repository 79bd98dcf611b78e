//! Integration test utilities for the event tracker
//!
//! Helpers for end-to-end tests against the REST API.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
