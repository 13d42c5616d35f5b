//! Event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::date::EventDate;
use super::zone::EventZone;

/// An organizer-owned event.
///
/// Image fields are opaque URL references; file storage lives outside
/// this system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// The organizer who owns this event.
    pub owner_id: Uuid,
    /// Event title.
    pub title: String,
    /// Long description (optional).
    pub description: Option<String>,
    /// Venue / location text.
    pub location: String,
    /// Cover image reference.
    pub cover_img: Option<String>,
    /// Logo image reference.
    pub logo_img: Option<String>,
    /// Main image reference.
    pub main_img: Option<String>,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new event row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    /// The organizer who owns the event.
    pub owner_id: Uuid,
    /// Event title.
    pub title: String,
    /// Long description (optional).
    pub description: Option<String>,
    /// Venue / location text.
    pub location: String,
    /// Cover image reference.
    pub cover_img: Option<String>,
    /// Logo image reference.
    pub logo_img: Option<String>,
    /// Main image reference.
    pub main_img: Option<String>,
}

/// An event together with its scheduled dates and pricing zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDetails {
    /// The event row.
    pub event: Event,
    /// Scheduled occurrences.
    pub dates: Vec<EventDate>,
    /// Pricing/seating tiers.
    pub zones: Vec<EventZone>,
}
