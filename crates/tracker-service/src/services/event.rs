//! Event service
//!
//! Handles event listings, creation and owner-only updates.

use std::collections::HashMap;

use tracing::{info, instrument};
use tracker_core::{DomainError, Event, EventChanges, EventId, EventQuery, UserId};

use crate::dto::{
    EventRequest, EventResponse, EventWithDetails, UpdateEventStatusRequest,
    UpdateEventVisibilityRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List visible events, optionally by creator and search term
    #[instrument(skip(self))]
    pub async fn list_events(
        &self,
        created_by: Option<UserId>,
        search: Option<String>,
    ) -> ServiceResult<Vec<EventResponse>> {
        let search = search.filter(|term| !term.trim().is_empty());
        self.list(EventQuery {
            created_by,
            search,
            visible: Some(true),
        })
        .await
    }

    /// List hidden events, optionally by creator
    #[instrument(skip(self))]
    pub async fn list_hidden_events(
        &self,
        created_by: Option<UserId>,
    ) -> ServiceResult<Vec<EventResponse>> {
        self.list(EventQuery {
            created_by,
            search: None,
            visible: Some(false),
        })
        .await
    }

    /// Get an event with its category and creator
    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: EventId) -> ServiceResult<EventResponse> {
        let event = self.find_event(event_id).await?;
        self.respond(event).await
    }

    /// Create an event owned by `actor`
    #[instrument(skip(self, request))]
    pub async fn create_event(
        &self,
        actor: UserId,
        request: EventRequest,
    ) -> ServiceResult<EventResponse> {
        if !self.ctx.user_repo().exists(actor).await? {
            return Err(ServiceError::InvalidReference(DomainError::UserNotFound(actor)));
        }
        self.check_references(&request).await?;

        let mut event = Event::new(request.title.clone(), request.start_date_time, actor);
        event.apply(changes_from(request));

        self.ctx.event_repo().create(&event).await?;

        info!(
            event_id = %event.id,
            actor = %actor,
            max_capacity = ?event.max_capacity,
            "Event created"
        );

        self.respond(event).await
    }

    /// Replace the editable fields of an event. Owner only.
    ///
    /// Lowering `maxCapacity` below the accepted total leaves existing
    /// acceptances in place; further accepts fail until room frees up.
    #[instrument(skip(self, request))]
    pub async fn update_event(
        &self,
        actor: UserId,
        event_id: EventId,
        request: EventRequest,
    ) -> ServiceResult<EventResponse> {
        self.find_owned_event(actor, event_id).await?;
        self.check_references(&request).await?;

        let event = self
            .ctx
            .event_repo()
            .update(event_id, &changes_from(request))
            .await?;

        info!(event_id = %event_id, actor = %actor, "Event updated");

        self.respond(event).await
    }

    /// Mark an event cancelled and/or completed. Owner only.
    #[instrument(skip(self))]
    pub async fn set_event_status(
        &self,
        actor: UserId,
        event_id: EventId,
        request: UpdateEventStatusRequest,
    ) -> ServiceResult<EventResponse> {
        self.find_owned_event(actor, event_id).await?;

        let event = self
            .ctx
            .event_repo()
            .set_status(event_id, request.is_cancelled, request.is_completed)
            .await?;

        info!(
            event_id = %event_id,
            is_cancelled = event.is_cancelled,
            is_completed = event.is_completed,
            "Event status updated"
        );

        self.respond(event).await
    }

    /// Show or hide an event. Owner only.
    #[instrument(skip(self))]
    pub async fn set_event_visibility(
        &self,
        actor: UserId,
        event_id: EventId,
        request: UpdateEventVisibilityRequest,
    ) -> ServiceResult<EventResponse> {
        self.find_owned_event(actor, event_id).await?;

        let event = self
            .ctx
            .event_repo()
            .set_visibility(event_id, request.is_visible)
            .await?;

        info!(event_id = %event_id, is_visible = event.is_visible, "Event visibility updated");

        self.respond(event).await
    }

    /// Load events with their categories and creators in three queries
    pub(crate) async fn load_details(
        &self,
        event_ids: &[EventId],
    ) -> ServiceResult<Vec<EventWithDetails>> {
        let events = self.ctx.event_repo().find_by_ids(event_ids).await?;
        self.attach_details(events).await
    }

    async fn list(&self, query: EventQuery) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().find(query).await?;
        Ok(self
            .attach_details(events)
            .await?
            .into_iter()
            .map(EventResponse::from)
            .collect())
    }

    async fn respond(&self, event: Event) -> ServiceResult<EventResponse> {
        self.attach_details(vec![event])
            .await?
            .pop()
            .map(EventResponse::from)
            .ok_or_else(|| ServiceError::internal("event details went missing"))
    }

    async fn attach_details(&self, events: Vec<Event>) -> ServiceResult<Vec<EventWithDetails>> {
        if events.is_empty() {
            return Ok(Vec::new());
        }

        let categories: HashMap<_, _> = if events.iter().any(|e| e.category_id.is_some()) {
            self.ctx
                .category_repo()
                .find_all(false)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        } else {
            HashMap::new()
        };

        let mut creator_ids: Vec<_> = events.iter().map(|e| e.created_by).collect();
        creator_ids.sort_unstable();
        creator_ids.dedup();
        let creators: HashMap<_, _> = self
            .ctx
            .user_repo()
            .find_by_ids(&creator_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(events
            .into_iter()
            .map(|event| EventWithDetails {
                category: event.category_id.and_then(|id| categories.get(&id).cloned()),
                creator: creators.get(&event.created_by).cloned(),
                event,
            })
            .collect())
    }

    async fn find_event(&self, event_id: EventId) -> ServiceResult<Event> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or(DomainError::EventNotFound(event_id))?;
        Ok(event)
    }

    async fn find_owned_event(&self, actor: UserId, event_id: EventId) -> ServiceResult<Event> {
        let event = self.find_event(event_id).await?;
        if !event.is_owned_by(actor) {
            return Err(DomainError::NotEventOwner.into());
        }
        Ok(event)
    }

    async fn check_references(&self, request: &EventRequest) -> ServiceResult<()> {
        if let Some(end) = request.end_date_time {
            if end < request.start_date_time {
                return Err(ServiceError::validation("End date must not be before start date"));
            }
        }
        if let Some(category_id) = request.category_id {
            if self.ctx.category_repo().find_by_id(category_id).await?.is_none() {
                return Err(ServiceError::InvalidReference(DomainError::CategoryNotFound(
                    category_id,
                )));
            }
        }
        if let Some(parent_id) = request.parent_event_id {
            if !self.ctx.event_repo().exists(parent_id).await? {
                return Err(ServiceError::InvalidReference(DomainError::EventNotFound(parent_id)));
            }
        }
        Ok(())
    }
}

fn changes_from(request: EventRequest) -> EventChanges {
    EventChanges {
        title: request.title,
        description: request.description,
        start_date_time: request.start_date_time,
        end_date_time: request.end_date_time,
        address: request.address,
        category_id: request.category_id,
        event_type: request.event_type,
        max_capacity: request.max_capacity,
        parent_event_id: request.parent_event_id,
        is_visible: request.is_visible,
    }
}
