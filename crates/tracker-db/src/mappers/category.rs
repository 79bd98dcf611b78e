//! Category entity <-> model mapper

use tracker_core::entities::Category;

use crate::models::CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.id,
            name: model.name,
            description: model.description,
            color: model.color,
            icon: model.icon,
            is_active: model.is_active,
        }
    }
}
