//! Event entity <-> model mapper

use tracker_core::entities::Event;
use tracker_core::value_objects::{EventId, UserId};

use crate::models::EventModel;

/// Convert EventModel to Event entity
impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: EventId::from_uuid(model.id),
            title: model.title,
            description: model.description,
            start_date_time: model.start_date_time,
            end_date_time: model.end_date_time,
            address: model.address,
            category_id: model.category_id,
            event_type: model.event_type,
            max_capacity: model.max_capacity,
            is_cancelled: model.is_cancelled,
            is_completed: model.is_completed,
            is_visible: model.is_visible,
            created_by: UserId::from_uuid(model.created_by),
            parent_event_id: model.parent_event_id.map(EventId::from_uuid),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
