//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tracker_core::entities::{CommentType, EventComment};
use tracker_core::error::DomainError;
use tracker_core::traits::{CommentRepository, RepoResult};
use tracker_core::value_objects::{CommentId, EventId};

use crate::models::CommentModel;

use super::error::map_db_error;

const COMMENT_COLUMNS: &str =
    "id, event_id, user_id, content, comment_type, created_at, updated_at, is_deleted";

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<EventComment>> {
        let result = sqlx::query_as::<_, CommentModel>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM event_comments WHERE id = $1 AND NOT is_deleted"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(EventComment::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_event(
        &self,
        event_id: EventId,
        comment_type: Option<CommentType>,
    ) -> RepoResult<Vec<EventComment>> {
        let results = sqlx::query_as::<_, CommentModel>(&format!(
            r"
            SELECT {COMMENT_COLUMNS}
            FROM event_comments
            WHERE event_id = $1
              AND NOT is_deleted
              AND ($2::text IS NULL OR comment_type = $2)
            ORDER BY created_at DESC
            "
        ))
        .bind(event_id.into_inner())
        .bind(comment_type.map(CommentType::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(EventComment::try_from).collect()
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn create(&self, comment: &EventComment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO event_comments (id, event_id, user_id, content, comment_type,
                                        created_at, updated_at, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.event_id.into_inner())
        .bind(comment.user_id.into_inner())
        .bind(&comment.content)
        .bind(comment.comment_type.as_str())
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .bind(comment.is_deleted)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn update(&self, comment: &EventComment) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE event_comments
            SET content = $2, updated_at = $3
            WHERE id = $1 AND NOT is_deleted
            ",
        )
        .bind(comment.id.into_inner())
        .bind(&comment.content)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(comment.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CommentId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE event_comments
            SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        Ok(())
    }
}
