//! Availability queries for the storefront.

use std::sync::Arc;

use uuid::Uuid;

use eventy_core::error::AppError;
use eventy_core::result::AppResult;
use eventy_database::repositories::{EventRepository, TicketRepository};
use eventy_entity::ticket::AvailableTicket;

/// Read-only service listing purchasable tickets.
///
/// Every call reads the latest committed state from PostgreSQL. There is
/// no cache in front of this query: stale availability would surface as
/// oversell attempts that the purchase transactor then has to reject.
#[derive(Debug, Clone)]
pub struct AvailabilityService {
    /// Event repository.
    events: Arc<EventRepository>,
    /// Ticket repository.
    tickets: Arc<TicketRepository>,
}

impl AvailabilityService {
    /// Create a new availability service.
    pub fn new(events: Arc<EventRepository>, tickets: Arc<TicketRepository>) -> Self {
        Self { events, tickets }
    }

    /// List all available tickets under an event, optionally narrowed to
    /// one zone and/or one date.
    pub async fn list_available(
        &self,
        event_id: Uuid,
        zone_id: Option<Uuid>,
        date_id: Option<Uuid>,
    ) -> AppResult<Vec<AvailableTicket>> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        self.tickets.find_available(event_id, zone_id, date_id).await
    }
}
