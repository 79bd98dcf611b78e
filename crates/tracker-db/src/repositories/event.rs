//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tracker_core::entities::{Event, EventChanges};
use tracker_core::error::DomainError;
use tracker_core::traits::{EventQuery, EventRepository, RepoResult};
use tracker_core::value_objects::{EventId, UserId};

use crate::models::EventModel;

use super::error::{like_pattern, map_db_error};

const EVENT_COLUMNS: &str = "id, title, description, start_date_time, end_date_time, address, \
    category_id, event_type, max_capacity, is_cancelled, is_completed, is_visible, created_by, \
    parent_event_id, created_at, updated_at";

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[EventId]) -> RepoResult<Vec<Event>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn find(&self, query: EventQuery) -> RepoResult<Vec<Event>> {
        let pattern = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(like_pattern);

        let results = sqlx::query_as::<_, EventModel>(&format!(
            r"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE ($1::uuid IS NULL OR created_by = $1)
              AND ($2::text IS NULL OR title ILIKE $2 OR description ILIKE $2)
              AND ($3::bool IS NULL OR is_visible = $3)
            ORDER BY start_date_time
            "
        ))
        .bind(query.created_by.map(UserId::into_inner))
        .bind(pattern)
        .bind(query.visible)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: EventId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)")
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn create(&self, event: &Event) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO events (id, title, description, start_date_time, end_date_time, address,
                                category_id, event_type, max_capacity, is_cancelled, is_completed,
                                is_visible, created_by, parent_event_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ",
        )
        .bind(event.id.into_inner())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.start_date_time)
        .bind(event.end_date_time)
        .bind(&event.address)
        .bind(event.category_id)
        .bind(&event.event_type)
        .bind(event.max_capacity)
        .bind(event.is_cancelled)
        .bind(event.is_completed)
        .bind(event.is_visible)
        .bind(event.created_by.into_inner())
        .bind(event.parent_event_id.map(EventId::into_inner))
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    /// The UPDATE takes the same row lock as an in-flight accept, so a
    /// capacity change waits for it to commit.
    #[instrument(skip(self, changes))]
    async fn update(&self, id: EventId, changes: &EventChanges) -> RepoResult<Event> {
        let result = sqlx::query_as::<_, EventModel>(&format!(
            r"
            UPDATE events
            SET title = $2, description = $3, start_date_time = $4, end_date_time = $5,
                address = $6, category_id = $7, event_type = $8, max_capacity = $9,
                parent_event_id = $10, is_visible = COALESCE($11, is_visible),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "
        ))
        .bind(id.into_inner())
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.start_date_time)
        .bind(changes.end_date_time)
        .bind(&changes.address)
        .bind(changes.category_id)
        .bind(&changes.event_type)
        .bind(changes.max_capacity)
        .bind(changes.parent_event_id.map(EventId::into_inner))
        .bind(changes.is_visible)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Event::from).ok_or(DomainError::EventNotFound(id))
    }

    #[instrument(skip(self))]
    async fn set_status(
        &self,
        id: EventId,
        is_cancelled: Option<bool>,
        is_completed: Option<bool>,
    ) -> RepoResult<Event> {
        let result = sqlx::query_as::<_, EventModel>(&format!(
            r"
            UPDATE events
            SET is_cancelled = COALESCE($2, is_cancelled),
                is_completed = COALESCE($3, is_completed),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "
        ))
        .bind(id.into_inner())
        .bind(is_cancelled)
        .bind(is_completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Event::from).ok_or(DomainError::EventNotFound(id))
    }

    #[instrument(skip(self))]
    async fn set_visibility(&self, id: EventId, is_visible: bool) -> RepoResult<Event> {
        let result = sqlx::query_as::<_, EventModel>(&format!(
            r"
            UPDATE events
            SET is_visible = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "
        ))
        .bind(id.into_inner())
        .bind(is_visible)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Event::from).ok_or(DomainError::EventNotFound(id))
    }
}
