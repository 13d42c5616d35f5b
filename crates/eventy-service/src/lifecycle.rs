//! Event lifecycle guard: deletion is blocked while sold tickets exist.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use eventy_core::error::{AppError, ErrorKind};
use eventy_core::result::AppResult;
use eventy_database::repositories::EventRepository;

/// Guards event deletion and performs the cascading removal.
#[derive(Debug, Clone)]
pub struct EventLifecycleService {
    /// Connection pool; each deletion owns one transaction.
    pool: PgPool,
    /// Event repository.
    events: Arc<EventRepository>,
}

impl EventLifecycleService {
    /// Create a new lifecycle service.
    pub fn new(pool: PgPool, events: Arc<EventRepository>) -> Self {
        Self { pool, events }
    }

    /// Whether the event may currently be deleted.
    ///
    /// True iff the event exists and none of its tickets (across all
    /// zones and dates) have left the available state.
    pub async fn can_delete(&self, event_id: Uuid) -> AppResult<bool> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let mut conn = self.pool.acquire().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to acquire connection", e)
        })?;
        let sold = self
            .events
            .non_available_ticket_count(&mut conn, event_id)
            .await?;
        Ok(sold == 0)
    }

    /// Delete an event and all of its child rows.
    ///
    /// Fails with an invalid-state error when any ticket has been sold.
    /// The sold-ticket check runs inside the delete transaction, so a
    /// purchase landing concurrently still maps to the invalid-state
    /// error rather than a foreign key failure. The removal proceeds in
    /// dependency order: tickets, zones, dates, social media, then the
    /// event row.
    pub async fn delete(&self, event_id: Uuid) -> AppResult<()> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin delete transaction", e)
        })?;

        let sold = self
            .events
            .non_available_ticket_count(&mut tx, event_id)
            .await?;
        if sold > 0 {
            return Err(AppError::invalid_state(
                "Cannot delete event with sold tickets. Event has purchased tickets.",
            ));
        }

        self.events.delete_tickets(&mut tx, event_id).await?;
        self.events.delete_zones(&mut tx, event_id).await?;
        self.events.delete_dates(&mut tx, event_id).await?;
        self.events.delete_social_media(&mut tx, event_id).await?;
        self.events.delete_event(&mut tx, event_id).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit event deletion", e)
        })?;

        tracing::info!(event_id = %event_id, "Event deleted");
        Ok(())
    }
}
