//! Category service

use tracing::instrument;

use crate::dto::CategoryResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All categories ordered by name
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ServiceResult<Vec<CategoryResponse>> {
        self.list(false).await
    }

    /// Categories that can be assigned to new events
    #[instrument(skip(self))]
    pub async fn list_active_categories(&self) -> ServiceResult<Vec<CategoryResponse>> {
        self.list(true).await
    }

    async fn list(&self, active_only: bool) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().find_all(active_only).await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }
}
