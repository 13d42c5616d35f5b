//! Event zone entity: a pricing/seating tier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A pricing/seating tier within an event (e.g. VIP, General).
///
/// `seat_count` fixes the zone's capacity: exactly that many tickets
/// exist per (zone, date) pair once inventory has been generated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventZone {
    /// Unique zone identifier.
    pub id: Uuid,
    /// The owning event.
    pub event_id: Uuid,
    /// Tier name.
    pub name: String,
    /// Unit price for one seat.
    pub price: Decimal,
    /// ISO currency code for the price.
    pub currency: String,
    /// Number of seats in this zone per date.
    pub seat_count: i32,
}

/// Data for creating an event zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEventZone {
    /// Tier name.
    pub name: String,
    /// Unit price for one seat.
    pub price: Decimal,
    /// ISO currency code for the price.
    pub currency: String,
    /// Number of seats in this zone per date.
    pub seat_count: i32,
}
