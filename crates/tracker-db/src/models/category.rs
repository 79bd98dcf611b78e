//! Category database model

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub is_active: bool,
}
