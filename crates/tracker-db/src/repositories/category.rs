//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tracker_core::entities::{Category, NewCategory};
use tracker_core::traits::{CategoryRepository, RepoResult};
use tracker_core::value_objects::CategoryId;

use crate::models::CategoryModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            "SELECT id, name, description, color, icon, is_active FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, active_only: bool) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description, color, icon, is_active
            FROM categories
            WHERE NOT $1 OR is_active
            ORDER BY name
            ",
        )
        .bind(active_only)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self, category), fields(name = %category.name))]
    async fn create(&self, category: NewCategory) -> RepoResult<Category> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            INSERT INTO categories (name, description, color, icon, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, color, icon, is_active
            ",
        )
        .bind(category.name)
        .bind(category.description)
        .bind(category.color)
        .bind(category.icon)
        .bind(category.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Category::from(result))
    }
}
