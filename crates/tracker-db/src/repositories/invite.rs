//! PostgreSQL implementation of InviteRepository
//!
//! The accept path runs in one transaction that locks the invite row and then
//! the parent event row (`SELECT ... FOR UPDATE`). Every accept on an event
//! queues on that event lock, so the accepted sum read inside the transaction
//! cannot change before the write commits.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};
use uuid::Uuid;

use tracker_core::entities::{Invite, InviteStatus};
use tracker_core::error::DomainError;
use tracker_core::traits::{InviteQuery, InviteRepository, RepoResult};
use tracker_core::value_objects::{
    check_admission, resolve_participant_count, CapacityLimit, EventId, InviteId, UserId,
};

use crate::mappers::invites_from_models;
use crate::models::InviteModel;

use super::error::{map_db_error, map_unique_violation};

const INVITE_COLUMNS: &str =
    "id, event_id, invited_user_id, status, participant_count, created_at, updated_at";

/// Default time the accept transaction waits for a row lock
const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// PostgreSQL implementation of InviteRepository
#[derive(Clone)]
pub struct PgInviteRepository {
    pool: PgPool,
    lock_timeout: Duration,
}

impl PgInviteRepository {
    /// Create a new PgInviteRepository
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }

    /// Bound how long an accept waits on a contended event
    pub fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
        self.lock_timeout = lock_timeout;
        self
    }

    async fn accept_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: InviteId,
        participant_count: Option<i32>,
    ) -> RepoResult<Invite> {
        // set_config(.., true) is transaction-local, same as SET LOCAL
        sqlx::query("SELECT set_config('lock_timeout', $1, true)")
            .bind(format!("{}ms", self.lock_timeout.as_millis()))
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;

        let invite = sqlx::query_as::<_, InviteModel>(&format!(
            "SELECT {INVITE_COLUMNS} FROM event_invites WHERE id = $1 FOR UPDATE"
        ))
        .bind(id.into_inner())
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::InviteNotFound(id))?;
        let invite = Invite::try_from(invite)?;

        let max_capacity = sqlx::query_scalar::<_, Option<i32>>(
            "SELECT max_capacity FROM events WHERE id = $1 FOR UPDATE",
        )
        .bind(invite.event_id.into_inner())
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::EventNotFound(invite.event_id))?;

        let requested = resolve_participant_count(participant_count, invite.participant_count);

        if !CapacityLimit::from_max(max_capacity).is_unlimited() {
            let accepted_by_others = sqlx::query_scalar::<_, i64>(
                r"
                SELECT COALESCE(SUM(participant_count), 0)::BIGINT
                FROM event_invites
                WHERE event_id = $1 AND status = 'accepted' AND id <> $2
                ",
            )
            .bind(invite.event_id.into_inner())
            .bind(id.into_inner())
            .fetch_one(&mut **tx)
            .await
            .map_err(map_db_error)?;

            debug!(
                event_id = %invite.event_id,
                ?max_capacity,
                accepted_by_others,
                requested,
                "Checking event capacity"
            );
            check_admission(max_capacity, accepted_by_others, requested)?;
        }

        let updated = sqlx::query_as::<_, InviteModel>(&format!(
            r"
            UPDATE event_invites
            SET status = 'accepted', participant_count = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {INVITE_COLUMNS}
            "
        ))
        .bind(id.into_inner())
        .bind(requested)
        .fetch_one(&mut **tx)
        .await
        .map_err(map_db_error)?;

        Invite::try_from(updated)
    }
}

#[async_trait]
impl InviteRepository for PgInviteRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: InviteId) -> RepoResult<Option<Invite>> {
        let result = sqlx::query_as::<_, InviteModel>(&format!(
            "SELECT {INVITE_COLUMNS} FROM event_invites WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Invite::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find(&self, query: InviteQuery) -> RepoResult<Vec<Invite>> {
        let results = sqlx::query_as::<_, InviteModel>(&format!(
            r"
            SELECT {INVITE_COLUMNS}
            FROM event_invites
            WHERE ($1::uuid IS NULL OR invited_user_id = $1)
              AND ($2::uuid IS NULL OR event_id = $2)
              AND ($3::text IS NULL OR status = $3)
            ORDER BY created_at DESC
            "
        ))
        .bind(query.user_id.map(UserId::into_inner))
        .bind(query.event_id.map(EventId::into_inner))
        .bind(query.status.map(InviteStatus::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        invites_from_models(results)
    }

    #[instrument(skip(self))]
    async fn exists_for(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM event_invites WHERE event_id = $1 AND invited_user_id = $2
            )
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, invite), fields(invite_id = %invite.id))]
    async fn create(&self, invite: &Invite) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO event_invites (id, event_id, invited_user_id, status,
                                       participant_count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(invite.id.into_inner())
        .bind(invite.event_id.into_inner())
        .bind(invite.invited_user_id.into_inner())
        .bind(invite.status.as_str())
        .bind(invite.participant_count)
        .bind(invite.created_at)
        .bind(invite.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateInvite))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        id: InviteId,
        status: InviteStatus,
        participant_count: Option<i32>,
    ) -> RepoResult<Invite> {
        if status.consumes_capacity() {
            return self.accept_within_capacity(id, participant_count).await;
        }

        let result = sqlx::query_as::<_, InviteModel>(&format!(
            r"
            UPDATE event_invites
            SET status = $2,
                participant_count = COALESCE($3, participant_count),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {INVITE_COLUMNS}
            "
        ))
        .bind(id.into_inner())
        .bind(status.as_str())
        .bind(participant_count.map(|c| c.max(1)))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::InviteNotFound(id))?;

        Invite::try_from(result)
    }

    #[instrument(skip(self))]
    async fn accept_within_capacity(
        &self,
        id: InviteId,
        participant_count: Option<i32>,
    ) -> RepoResult<Invite> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        match self.accept_in_tx(&mut tx, id, participant_count).await {
            Ok(invite) => {
                tx.commit().await.map_err(map_db_error)?;
                Ok(invite)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    debug!(error = %rollback_err, "Rollback after failed accept did not complete");
                }
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    async fn accepted_participants(&self, event_id: EventId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COALESCE(SUM(participant_count), 0)::BIGINT
            FROM event_invites
            WHERE event_id = $1 AND status = 'accepted'
            ",
        )
        .bind(event_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: InviteId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM event_invites WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::InviteNotFound(id));
        }

        Ok(())
    }
}
