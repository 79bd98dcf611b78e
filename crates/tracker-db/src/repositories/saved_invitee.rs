//! PostgreSQL implementation of SavedInviteeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tracker_core::entities::SavedInvitee;
use tracker_core::error::DomainError;
use tracker_core::traits::{RepoResult, SavedInviteeRepository};
use tracker_core::value_objects::UserId;

use crate::models::SavedInviteeModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of SavedInviteeRepository
#[derive(Clone)]
pub struct PgSavedInviteeRepository {
    pool: PgPool,
}

impl PgSavedInviteeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SavedInviteeRepository for PgSavedInviteeRepository {
    #[instrument(skip(self))]
    async fn find_by_owner(&self, owner: UserId) -> RepoResult<Vec<SavedInvitee>> {
        let results = sqlx::query_as::<_, SavedInviteeModel>(
            r"
            SELECT owner_user_id, saved_user_id, created_at
            FROM saved_invitees
            WHERE owner_user_id = $1
            ORDER BY created_at
            ",
        )
        .bind(owner.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SavedInvitee::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, owner: UserId, saved: UserId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM saved_invitees WHERE owner_user_id = $1 AND saved_user_id = $2
            )
            ",
        )
        .bind(owner.into_inner())
        .bind(saved.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(
        skip(self, entry),
        fields(owner = %entry.owner_user_id, saved = %entry.saved_user_id)
    )]
    async fn create(&self, entry: &SavedInvitee) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO saved_invitees (owner_user_id, saved_user_id, created_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(entry.owner_user_id.into_inner())
        .bind(entry.saved_user_id.into_inner())
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateSavedInvitee))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, owner: UserId, saved: UserId) -> RepoResult<()> {
        let result = sqlx::query(
            "DELETE FROM saved_invitees WHERE owner_user_id = $1 AND saved_user_id = $2",
        )
        .bind(owner.into_inner())
        .bind(saved.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SavedInviteeNotFound);
        }

        Ok(())
    }
}
