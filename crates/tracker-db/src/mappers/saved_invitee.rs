//! SavedInvitee entity <-> model mapper

use tracker_core::entities::SavedInvitee;
use tracker_core::value_objects::UserId;

use crate::models::SavedInviteeModel;

impl From<SavedInviteeModel> for SavedInvitee {
    fn from(model: SavedInviteeModel) -> Self {
        SavedInvitee {
            owner_user_id: UserId::from_uuid(model.owner_user_id),
            saved_user_id: UserId::from_uuid(model.saved_user_id),
            created_at: model.created_at,
        }
    }
}
