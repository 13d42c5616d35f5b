//! Event catalogue and composite event creation.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use eventy_core::error::{AppError, ErrorKind};
use eventy_core::result::AppResult;
use eventy_core::types::pagination::{PageRequest, PageResponse};
use eventy_database::repositories::{EventRepository, SoldTicketRepository, UserRepository};
use eventy_entity::event::{Event, EventDetails, NewEvent, NewEventDate, NewEventSocialMedia,
    NewEventZone};
use eventy_entity::ticket::SaleRecord;

use crate::inventory::InventoryGenerator;

/// All data for a composite event creation.
#[derive(Debug, Clone)]
pub struct CreateEventData {
    /// The event row.
    pub event: NewEvent,
    /// Scheduled occurrences (at least one).
    pub dates: Vec<NewEventDate>,
    /// Pricing zones (at least one).
    pub zones: Vec<NewEventZone>,
    /// Social media links.
    pub social_media: Vec<NewEventSocialMedia>,
}

/// Event catalogue service: composite creation, listing, organizer views.
#[derive(Debug, Clone)]
pub struct EventService {
    /// Connection pool; composite creation owns one transaction.
    pool: PgPool,
    /// Event repository.
    events: Arc<EventRepository>,
    /// Sale record repository (organizer sales view).
    sold_tickets: Arc<SoldTicketRepository>,
    /// User repository (owner checks).
    users: Arc<UserRepository>,
    /// Inventory generator, invoked inside the creation transaction.
    inventory: InventoryGenerator,
}

impl EventService {
    /// Create a new event service.
    pub fn new(
        pool: PgPool,
        events: Arc<EventRepository>,
        sold_tickets: Arc<SoldTicketRepository>,
        users: Arc<UserRepository>,
        inventory: InventoryGenerator,
    ) -> Self {
        Self {
            pool,
            events,
            sold_tickets,
            users,
            inventory,
        }
    }

    /// Create an event with its dates, zones, social media, and the full
    /// ticket inventory, as one atomic unit.
    ///
    /// A generation failure aborts the whole creation; no partially
    /// stocked event is ever committed.
    pub async fn create_event(&self, data: CreateEventData) -> AppResult<EventDetails> {
        if data.dates.is_empty() {
            return Err(AppError::validation("An event needs at least one date"));
        }
        if data.zones.is_empty() {
            return Err(AppError::validation("An event needs at least one zone"));
        }

        self.users
            .find_by_id(data.event.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Owner not found"))?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to begin event creation transaction",
                e,
            )
        })?;

        let event = self.events.insert(&mut tx, &data.event).await?;
        let dates = self
            .events
            .insert_dates(&mut tx, event.id, &data.dates)
            .await?;
        let zones = self
            .events
            .insert_zones(&mut tx, event.id, &data.zones)
            .await?;
        self.events
            .insert_social_media(&mut tx, event.id, &data.social_media)
            .await?;

        self.inventory.generate(&mut tx, &zones, &dates).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit event creation", e)
        })?;

        tracing::info!(event_id = %event.id, title = %event.title, "Event created");

        Ok(EventDetails {
            event,
            dates,
            zones,
        })
    }

    /// List one page of events, newest first.
    pub async fn list_events(&self, page: PageRequest) -> AppResult<PageResponse<Event>> {
        let items = self.events.find_page(&page).await?;
        let total = self.events.count().await?;
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    /// Fetch an event with its dates and zones.
    pub async fn get_event(&self, event_id: Uuid) -> AppResult<EventDetails> {
        let event = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let dates = self.events.dates_for_event(event_id).await?;
        let zones = self.events.zones_for_event(event_id).await?;

        Ok(EventDetails {
            event,
            dates,
            zones,
        })
    }

    /// List all sales under an event for the organizer view.
    pub async fn event_sales(&self, event_id: Uuid) -> AppResult<Vec<SaleRecord>> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        self.sold_tickets.find_for_event(event_id).await
    }
}
