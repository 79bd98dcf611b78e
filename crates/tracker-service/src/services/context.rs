//! Service context - dependency container for services
//!
//! Holds all repositories and the admission tuning needed by services.

use std::sync::Arc;

use tracker_common::AdmissionConfig;
use tracker_core::traits::{
    CategoryRepository, CommentRepository, EventRepository, InviteRepository,
    SavedInviteeRepository, UserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap: every repository sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    event_repo: Arc<dyn EventRepository>,
    invite_repo: Arc<dyn InviteRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    saved_invitee_repo: Arc<dyn SavedInviteeRepository>,

    admission: AdmissionConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        event_repo: Arc<dyn EventRepository>,
        invite_repo: Arc<dyn InviteRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        saved_invitee_repo: Arc<dyn SavedInviteeRepository>,
        admission: AdmissionConfig,
    ) -> Self {
        Self {
            user_repo,
            category_repo,
            event_repo,
            invite_repo,
            comment_repo,
            saved_invitee_repo,
            admission,
        }
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    pub fn invite_repo(&self) -> &dyn InviteRepository {
        self.invite_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn saved_invitee_repo(&self) -> &dyn SavedInviteeRepository {
        self.saved_invitee_repo.as_ref()
    }

    /// Retry and lock tuning for the accept path
    pub fn admission(&self) -> &AdmissionConfig {
        &self.admission
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("admission", &self.admission)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    invite_repo: Option<Arc<dyn InviteRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    saved_invitee_repo: Option<Arc<dyn SavedInviteeRepository>>,
    admission: Option<AdmissionConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn invite_repo(mut self, repo: Arc<dyn InviteRepository>) -> Self {
        self.invite_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn saved_invitee_repo(mut self, repo: Arc<dyn SavedInviteeRepository>) -> Self {
        self.saved_invitee_repo = Some(repo);
        self
    }

    /// Defaults to [`AdmissionConfig::default`] when not set
    pub fn admission(mut self, config: AdmissionConfig) -> Self {
        self.admission = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.category_repo.ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            self.event_repo.ok_or_else(|| ServiceError::validation("event_repo is required"))?,
            self.invite_repo.ok_or_else(|| ServiceError::validation("invite_repo is required"))?,
            self.comment_repo.ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.saved_invitee_repo
                .ok_or_else(|| ServiceError::validation("saved_invitee_repo is required"))?,
            self.admission.unwrap_or_default(),
        ))
    }
}
