//! Comment service
//!
//! Event discussion threads. Announcements are reserved for the event creator.

use std::collections::HashMap;

use tracing::{info, instrument};
use tracker_core::{CommentId, CommentType, DomainError, EventComment, EventId, UserId};

use crate::dto::{CommentResponse, CommentWithAuthor, CreateCommentRequest, UpdateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Non-deleted comments of an event, newest first
    #[instrument(skip(self))]
    pub async fn list_comments(
        &self,
        event_id: EventId,
        comment_type: Option<&str>,
    ) -> ServiceResult<Vec<CommentResponse>> {
        let comment_type = comment_type.map(CommentType::parse).transpose()?;

        if !self.ctx.event_repo().exists(event_id).await? {
            return Err(DomainError::EventNotFound(event_id).into());
        }

        let comments = self
            .ctx
            .comment_repo()
            .find_by_event(event_id, comment_type)
            .await?;

        let mut author_ids: Vec<_> = comments.iter().map(|c| c.user_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();
        let authors: HashMap<_, _> = self
            .ctx
            .user_repo()
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(comments
            .into_iter()
            .map(|comment| {
                let author = authors.get(&comment.user_id).cloned();
                CommentResponse::from(CommentWithAuthor { comment, author })
            })
            .collect())
    }

    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        actor: UserId,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let comment_type = request
            .comment_type
            .as_deref()
            .map(CommentType::parse)
            .transpose()?
            .unwrap_or_default();
        EventComment::validate_content(&request.content)?;

        let event = self
            .ctx
            .event_repo()
            .find_by_id(request.event_id)
            .await?
            .ok_or(ServiceError::InvalidReference(DomainError::EventNotFound(
                request.event_id,
            )))?;

        if comment_type == CommentType::Announcement && !event.is_owned_by(actor) {
            return Err(DomainError::NotEventOwner.into());
        }

        let comment = EventComment::new(event.id, actor, request.content, comment_type);
        self.ctx.comment_repo().create(&comment).await?;

        info!(
            comment_id = %comment.id,
            event_id = %event.id,
            actor = %actor,
            comment_type = %comment_type,
            "Comment created"
        );

        self.respond(comment).await
    }

    /// Edit a comment. Author only.
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        actor: UserId,
        comment_id: CommentId,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let mut comment = self.find_comment(comment_id).await?;
        if !comment.is_authored_by(actor) {
            return Err(DomainError::NotCommentAuthor.into());
        }
        EventComment::validate_content(&request.content)?;

        comment.edit(request.content);
        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, actor = %actor, "Comment updated");

        self.respond(comment).await
    }

    /// Soft-delete a comment. Allowed for its author and the event creator.
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, actor: UserId, comment_id: CommentId) -> ServiceResult<()> {
        let comment = self.find_comment(comment_id).await?;

        if !comment.is_authored_by(actor) {
            let owns_event = self
                .ctx
                .event_repo()
                .find_by_id(comment.event_id)
                .await?
                .is_some_and(|event| event.is_owned_by(actor));
            if !owns_event {
                return Err(DomainError::NotCommentAuthor.into());
            }
        }

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, actor = %actor, "Comment deleted");

        Ok(())
    }

    async fn find_comment(&self, comment_id: CommentId) -> ServiceResult<EventComment> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;
        Ok(comment)
    }

    async fn respond(&self, comment: EventComment) -> ServiceResult<CommentResponse> {
        let author = self.ctx.user_repo().find_by_id(comment.user_id).await?;
        Ok(CommentWithAuthor { comment, author }.into())
    }
}
