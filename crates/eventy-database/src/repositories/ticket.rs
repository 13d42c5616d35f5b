//! Ticket repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use eventy_core::error::{AppError, ErrorKind};
use eventy_core::result::AppResult;
use eventy_entity::ticket::{AvailableTicket, Ticket, TicketSeed};

/// Repository for the seat-level ticket inventory.
#[derive(Debug, Clone)]
pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    /// Create a new ticket repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Bulk-insert planned ticket rows within a caller-owned transaction.
    ///
    /// All rows start in the available state (column default). Returns the
    /// number of tickets created; a count differing from `seeds.len()`
    /// would mean a constraint rejected part of the plan, and the error
    /// from PostgreSQL aborts the enclosing transaction.
    pub async fn insert_seeds(
        &self,
        conn: &mut PgConnection,
        seeds: &[TicketSeed],
    ) -> AppResult<u64> {
        if seeds.is_empty() {
            return Ok(0);
        }

        let zone_ids: Vec<Uuid> = seeds.iter().map(|s| s.event_zone_id).collect();
        let date_ids: Vec<Uuid> = seeds.iter().map(|s| s.event_date_id).collect();
        let seat_numbers: Vec<i32> = seeds.iter().map(|s| s.seat_number).collect();

        let result = sqlx::query(
            "INSERT INTO tickets (event_zone_id, event_date_id, seat_number) \
             SELECT zone_id, date_id, seat \
             FROM UNNEST($1::uuid[], $2::uuid[], $3::int4[]) AS seed(zone_id, date_id, seat)",
        )
        .bind(&zone_ids)
        .bind(&date_ids)
        .bind(&seat_numbers)
        .execute(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert ticket inventory", e)
        })?;

        Ok(result.rows_affected())
    }

    /// List available tickets under an event, optionally narrowed to one
    /// zone and/or one date.
    ///
    /// Reads the latest committed state directly from PostgreSQL; there is
    /// deliberately no caching layer in front of this query.
    pub async fn find_available(
        &self,
        event_id: Uuid,
        zone_id: Option<Uuid>,
        date_id: Option<Uuid>,
    ) -> AppResult<Vec<AvailableTicket>> {
        sqlx::query_as::<_, AvailableTicket>(
            "SELECT t.id AS ticket_id, t.event_zone_id, z.name AS zone_name, \
                    t.event_date_id, d.date, t.seat_number \
             FROM tickets t \
             JOIN event_zones z ON z.id = t.event_zone_id \
             JOIN event_dates d ON d.id = t.event_date_id \
             WHERE z.event_id = $1 \
               AND ($2::uuid IS NULL OR t.event_zone_id = $2) \
               AND ($3::uuid IS NULL OR t.event_date_id = $3) \
               AND t.status = 'available' \
             ORDER BY z.name, d.date, t.seat_number",
        )
        .bind(event_id)
        .bind(zone_id)
        .bind(date_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list available tickets", e)
        })
    }

    /// Lock the given tickets for purchase within a caller-owned transaction.
    ///
    /// `ORDER BY id` gives every purchaser the same acquisition order, so
    /// two transactions locking overlapping sets cannot deadlock; one simply
    /// waits for the other. Tickets outside the requested set stay unlocked,
    /// so purchasers of disjoint sets do not block each other.
    pub async fn lock_for_purchase(
        &self,
        conn: &mut PgConnection,
        ticket_ids: &[Uuid],
    ) -> AppResult<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE id = ANY($1) ORDER BY id FOR UPDATE",
        )
        .bind(ticket_ids)
        .fetch_all(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to lock tickets for purchase", e)
        })
    }

    /// Flip one ticket to sold within a caller-owned transaction.
    ///
    /// The status predicate in the WHERE clause makes this a guarded
    /// compare-and-set: it affects zero rows unless the ticket is still
    /// available at the time of the update.
    pub async fn mark_sold(&self, conn: &mut PgConnection, ticket_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE tickets SET status = 'sold', updated_at = NOW() \
             WHERE id = $1 AND status = 'available'",
        )
        .bind(ticket_id)
        .execute(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark ticket sold", e)
        })?;
        Ok(result.rows_affected())
    }
}
