//! Sold ticket and purchase contact info repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use eventy_core::error::{AppError, ErrorKind};
use eventy_core::result::AppResult;
use eventy_entity::ticket::{BuyerTicket, NewContactInfo, PurchaseContactInfo, SaleRecord,
    SoldTicket};

/// Repository for sale records and contact snapshots.
#[derive(Debug, Clone)]
pub struct SoldTicketRepository {
    pool: PgPool,
}

impl SoldTicketRepository {
    /// Create a new sold ticket repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a sale record within a caller-owned transaction.
    ///
    /// The unique constraint on `ticket_id` backs up the status check: a
    /// second sale of the same ticket cannot commit even if it somehow got
    /// past the row lock.
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        ticket_id: Uuid,
        buyer_id: Uuid,
        payment_method: &str,
        contact_info_id: Option<Uuid>,
    ) -> AppResult<SoldTicket> {
        sqlx::query_as::<_, SoldTicket>(
            "INSERT INTO sold_tickets (ticket_id, buyer_id, payment_method, purchase_contact_info_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(ticket_id)
        .bind(buyer_id)
        .bind(payment_method)
        .bind(contact_info_id)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert sale record", e))
    }

    /// Persist a contact snapshot within a caller-owned transaction.
    pub async fn insert_contact_info(
        &self,
        conn: &mut PgConnection,
        data: &NewContactInfo,
    ) -> AppResult<PurchaseContactInfo> {
        sqlx::query_as::<_, PurchaseContactInfo>(
            "INSERT INTO purchase_contact_info (name, email, phone, agree_to_terms, marketing_consent) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.agree_to_terms)
        .bind(data.marketing_consent)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert contact snapshot", e)
        })
    }

    /// List a buyer's purchased tickets with their seat and event context,
    /// newest first.
    pub async fn find_by_buyer(&self, buyer_id: Uuid) -> AppResult<Vec<BuyerTicket>> {
        sqlx::query_as::<_, BuyerTicket>(
            "SELECT s.id AS sold_ticket_id, s.ticket_id, e.id AS event_id, \
                    e.title AS event_title, z.name AS zone_name, d.date, \
                    t.seat_number, s.payment_method, s.created_at AS purchased_at \
             FROM sold_tickets s \
             JOIN tickets t ON t.id = s.ticket_id \
             JOIN event_zones z ON z.id = t.event_zone_id \
             JOIN event_dates d ON d.id = t.event_date_id \
             JOIN events e ON e.id = z.event_id \
             WHERE s.buyer_id = $1 \
             ORDER BY s.created_at DESC",
        )
        .bind(buyer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list buyer tickets", e)
        })
    }

    /// List all sales under an event for the organizer view, newest first.
    pub async fn find_for_event(&self, event_id: Uuid) -> AppResult<Vec<SaleRecord>> {
        sqlx::query_as::<_, SaleRecord>(
            "SELECT s.id AS sold_ticket_id, s.ticket_id, z.name AS zone_name, d.date, \
                    t.seat_number, s.buyer_id, u.email AS buyer_email, \
                    c.name AS contact_name, c.email AS contact_email, c.phone AS contact_phone, \
                    s.payment_method, s.created_at AS purchased_at \
             FROM sold_tickets s \
             JOIN tickets t ON t.id = s.ticket_id \
             JOIN event_zones z ON z.id = t.event_zone_id \
             JOIN event_dates d ON d.id = t.event_date_id \
             JOIN users u ON u.id = s.buyer_id \
             LEFT JOIN purchase_contact_info c ON c.id = s.purchase_contact_info_id \
             WHERE z.event_id = $1 \
             ORDER BY s.created_at DESC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list event sales", e))
    }
}
