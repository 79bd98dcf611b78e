//! Invite entity <-> model mapper

use tracker_core::entities::{Invite, InviteStatus};
use tracker_core::error::DomainError;
use tracker_core::value_objects::{EventId, InviteId, UserId};

use crate::models::InviteModel;

/// Convert InviteModel to Invite entity
///
/// Fails only if the stored status is outside the CHECK constraint, which
/// means the row was written by something other than this crate.
impl TryFrom<InviteModel> for Invite {
    type Error = DomainError;

    fn try_from(model: InviteModel) -> Result<Self, Self::Error> {
        let status = InviteStatus::parse(&model.status).map_err(|_| {
            DomainError::DatabaseError(format!(
                "invite {} has unknown status '{}'",
                model.id, model.status
            ))
        })?;

        Ok(Invite {
            id: InviteId::from_uuid(model.id),
            event_id: EventId::from_uuid(model.event_id),
            invited_user_id: UserId::from_uuid(model.invited_user_id),
            status,
            participant_count: model.participant_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert a batch of rows, failing on the first bad one
pub fn invites_from_models(models: Vec<InviteModel>) -> Result<Vec<Invite>, DomainError> {
    models.into_iter().map(Invite::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn model(status: &str) -> InviteModel {
        InviteModel {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            invited_user_id: Uuid::new_v4(),
            status: status.to_string(),
            participant_count: 2,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_model_to_entity() {
        let row = model("accepted");
        let id = row.id;
        let invite = Invite::try_from(row).unwrap();
        assert_eq!(invite.id.into_inner(), id);
        assert_eq!(invite.status, InviteStatus::Accepted);
        assert_eq!(invite.participant_count, 2);
    }

    #[test]
    fn test_unknown_status_is_database_error() {
        let err = Invite::try_from(model("maybe")).unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
