//! Sold ticket (sale record) entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The immutable sale record created when a ticket transitions to sold.
///
/// References its ticket 1:1; the unique constraint on `ticket_id`
/// together with the `Available → Sold` transition guarantees at most
/// one sale record per ticket.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SoldTicket {
    /// Unique sale identifier.
    pub id: Uuid,
    /// The ticket that was sold (unique).
    pub ticket_id: Uuid,
    /// The buyer.
    pub buyer_id: Uuid,
    /// Opaque payment method tag (e.g. "card").
    pub payment_method: String,
    /// Contact snapshot, when the buyer supplied details diverging from
    /// their profile.
    pub purchase_contact_info_id: Option<Uuid>,
    /// Sale timestamp.
    pub created_at: DateTime<Utc>,
}

/// A buyer's purchased ticket joined with seat, zone, and event context.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BuyerTicket {
    /// The sale identifier.
    pub sold_ticket_id: Uuid,
    /// The ticket identifier.
    pub ticket_id: Uuid,
    /// The event.
    pub event_id: Uuid,
    /// Event title.
    pub event_title: String,
    /// Zone name.
    pub zone_name: String,
    /// When the occurrence takes place.
    pub date: DateTime<Utc>,
    /// 1-based seat number.
    pub seat_number: i32,
    /// Payment method tag.
    pub payment_method: String,
    /// Sale timestamp.
    pub purchased_at: DateTime<Utc>,
}

/// One sale as presented to the event organizer, with buyer identity
/// and the optional contact snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SaleRecord {
    /// The sale identifier.
    pub sold_ticket_id: Uuid,
    /// The ticket identifier.
    pub ticket_id: Uuid,
    /// Zone name.
    pub zone_name: String,
    /// When the occurrence takes place.
    pub date: DateTime<Utc>,
    /// 1-based seat number.
    pub seat_number: i32,
    /// The buyer.
    pub buyer_id: Uuid,
    /// Buyer email from the profile.
    pub buyer_email: String,
    /// Contact name from the snapshot, if one was taken.
    pub contact_name: Option<String>,
    /// Contact email from the snapshot, if one was taken.
    pub contact_email: Option<String>,
    /// Contact phone from the snapshot, if one was taken.
    pub contact_phone: Option<String>,
    /// Payment method tag.
    pub payment_method: String,
    /// Sale timestamp.
    pub purchased_at: DateTime<Utc>,
}
