//! User entity <-> model mapper

use tracker_core::entities::User;
use tracker_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::from_uuid(model.id),
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            date_of_birth: model.date_of_birth,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
