//! Event repository implementation.
//!
//! Composite event creation and lifecycle-guarded deletion both span
//! multiple tables, so the write methods here take a caller-owned
//! connection and are grouped into transactions by the service layer.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use eventy_core::error::{AppError, ErrorKind};
use eventy_core::result::AppResult;
use eventy_core::types::pagination::PageRequest;
use eventy_entity::event::{
    Event, EventDate, EventSocialMedia, EventZone, NewEvent, NewEventDate, NewEventSocialMedia,
    NewEventZone,
};

/// Repository for events and their child rows (dates, zones, social media).
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an event by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find event", e))
    }

    /// List one page of events, newest first.
    pub async fn find_page(&self, page: &PageRequest) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>(
            "SELECT * FROM events ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))
    }

    /// Count all events.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count events", e))?;
        Ok(count as u64)
    }

    /// List the scheduled dates of an event, earliest first.
    pub async fn dates_for_event(&self, event_id: Uuid) -> AppResult<Vec<EventDate>> {
        sqlx::query_as::<_, EventDate>(
            "SELECT * FROM event_dates WHERE event_id = $1 ORDER BY date ASC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list event dates", e))
    }

    /// List the pricing zones of an event, cheapest first.
    pub async fn zones_for_event(&self, event_id: Uuid) -> AppResult<Vec<EventZone>> {
        sqlx::query_as::<_, EventZone>(
            "SELECT * FROM event_zones WHERE event_id = $1 ORDER BY price ASC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list event zones", e))
    }

    /// Count tickets under the event that are not available (i.e. sold).
    ///
    /// A non-zero count blocks event deletion. Takes a caller-owned
    /// connection so the delete path can re-check inside its transaction.
    pub async fn non_available_ticket_count(
        &self,
        conn: &mut PgConnection,
        event_id: Uuid,
    ) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tickets t \
             JOIN event_zones z ON z.id = t.event_zone_id \
             WHERE z.event_id = $1 AND t.status <> 'available'",
        )
        .bind(event_id)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count sold tickets", e)
        })?;
        Ok(count as u64)
    }

    /// Insert the event row within a caller-owned transaction.
    pub async fn insert(&self, conn: &mut PgConnection, data: &NewEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (owner_id, title, description, location, cover_img, logo_img, main_img) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.location)
        .bind(&data.cover_img)
        .bind(&data.logo_img)
        .bind(&data.main_img)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert event", e))
    }

    /// Insert the event's scheduled dates within a caller-owned transaction.
    pub async fn insert_dates(
        &self,
        conn: &mut PgConnection,
        event_id: Uuid,
        dates: &[NewEventDate],
    ) -> AppResult<Vec<EventDate>> {
        let mut inserted = Vec::with_capacity(dates.len());
        for date in dates {
            let row = sqlx::query_as::<_, EventDate>(
                "INSERT INTO event_dates (event_id, date) VALUES ($1, $2) RETURNING *",
            )
            .bind(event_id)
            .bind(date.date)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert event date", e)
            })?;
            inserted.push(row);
        }
        Ok(inserted)
    }

    /// Insert the event's pricing zones within a caller-owned transaction.
    pub async fn insert_zones(
        &self,
        conn: &mut PgConnection,
        event_id: Uuid,
        zones: &[NewEventZone],
    ) -> AppResult<Vec<EventZone>> {
        let mut inserted = Vec::with_capacity(zones.len());
        for zone in zones {
            let row = sqlx::query_as::<_, EventZone>(
                "INSERT INTO event_zones (event_id, name, price, currency, seat_count) \
                 VALUES ($1, $2, $3, $4, $5) RETURNING *",
            )
            .bind(event_id)
            .bind(&zone.name)
            .bind(zone.price)
            .bind(&zone.currency)
            .bind(zone.seat_count)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert event zone", e)
            })?;
            inserted.push(row);
        }
        Ok(inserted)
    }

    /// Insert the event's social media links within a caller-owned transaction.
    pub async fn insert_social_media(
        &self,
        conn: &mut PgConnection,
        event_id: Uuid,
        links: &[NewEventSocialMedia],
    ) -> AppResult<Vec<EventSocialMedia>> {
        let mut inserted = Vec::with_capacity(links.len());
        for link in links {
            let row = sqlx::query_as::<_, EventSocialMedia>(
                "INSERT INTO event_social_media (event_id, platform, url) \
                 VALUES ($1, $2, $3) RETURNING *",
            )
            .bind(event_id)
            .bind(&link.platform)
            .bind(&link.url)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert social media link", e)
            })?;
            inserted.push(row);
        }
        Ok(inserted)
    }

    /// Delete all tickets under the event. Part of the cascading delete.
    pub async fn delete_tickets(&self, conn: &mut PgConnection, event_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM tickets WHERE event_zone_id IN \
             (SELECT id FROM event_zones WHERE event_id = $1)",
        )
        .bind(event_id)
        .execute(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete tickets", e))?;
        Ok(result.rows_affected())
    }

    /// Delete the event's pricing zones. Part of the cascading delete.
    pub async fn delete_zones(&self, conn: &mut PgConnection, event_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM event_zones WHERE event_id = $1")
            .bind(event_id)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete event zones", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Delete the event's scheduled dates. Part of the cascading delete.
    pub async fn delete_dates(&self, conn: &mut PgConnection, event_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM event_dates WHERE event_id = $1")
            .bind(event_id)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete event dates", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Delete the event's social media links. Part of the cascading delete.
    pub async fn delete_social_media(
        &self,
        conn: &mut PgConnection,
        event_id: Uuid,
    ) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM event_social_media WHERE event_id = $1")
            .bind(event_id)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete social media links", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Delete the event row itself. Must run after all child rows are gone.
    pub async fn delete_event(&self, conn: &mut PgConnection, event_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(event_id)
            .execute(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete event", e))?;
        Ok(result.rows_affected() > 0)
    }
}
