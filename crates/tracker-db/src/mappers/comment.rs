//! Event comment entity <-> model mapper

use tracker_core::entities::{CommentType, EventComment};
use tracker_core::error::DomainError;
use tracker_core::value_objects::{CommentId, EventId, UserId};

use crate::models::CommentModel;

impl TryFrom<CommentModel> for EventComment {
    type Error = DomainError;

    fn try_from(model: CommentModel) -> Result<Self, Self::Error> {
        let comment_type = CommentType::parse(&model.comment_type).map_err(|_| {
            DomainError::DatabaseError(format!(
                "comment {} has unknown type '{}'",
                model.id, model.comment_type
            ))
        })?;

        Ok(EventComment {
            id: CommentId::from_uuid(model.id),
            event_id: EventId::from_uuid(model.event_id),
            user_id: UserId::from_uuid(model.user_id),
            content: model.content,
            comment_type,
            created_at: model.created_at,
            updated_at: model.updated_at,
            is_deleted: model.is_deleted,
        })
    }
}
