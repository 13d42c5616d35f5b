//! Ticket entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::TicketStatus;

/// The atomic sellable unit: one seat in a zone on one date.
///
/// Exactly `seat_count` tickets exist per (zone, date) pair, with seat
/// numbers forming the contiguous range `1..=seat_count`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    /// Unique ticket identifier.
    pub id: Uuid,
    /// The owning pricing zone.
    pub event_zone_id: Uuid,
    /// The owning event date.
    pub event_date_id: Uuid,
    /// 1-based seat number, unique within the (zone, date) pair.
    pub seat_number: i32,
    /// Current lifecycle status.
    pub status: TicketStatus,
    /// When the ticket was created.
    pub created_at: DateTime<Utc>,
    /// When the ticket was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The plan for one ticket row prior to insertion.
///
/// Produced by the inventory generator's deterministic seat plan; no
/// clocks or randomness are involved so "seat 12 of zone A on date 3"
/// is a stable, human-referenceable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSeed {
    /// The owning pricing zone.
    pub event_zone_id: Uuid,
    /// The owning event date.
    pub event_date_id: Uuid,
    /// 1-based seat number.
    pub seat_number: i32,
}

/// An available ticket as presented to buyers, joined with its zone
/// and date context.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AvailableTicket {
    /// The ticket identifier to submit in a purchase.
    pub ticket_id: Uuid,
    /// The pricing zone.
    pub event_zone_id: Uuid,
    /// Zone name.
    pub zone_name: String,
    /// The event date.
    pub event_date_id: Uuid,
    /// When the occurrence takes place.
    pub date: DateTime<Utc>,
    /// 1-based seat number.
    pub seat_number: i32,
}
