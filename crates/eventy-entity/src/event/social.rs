//! Event social media link entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A social media link attached to an event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventSocialMedia {
    /// Unique row identifier.
    pub id: Uuid,
    /// The owning event.
    pub event_id: Uuid,
    /// Platform name (e.g. "instagram").
    pub platform: String,
    /// Link URL.
    pub url: String,
}

/// Data for creating a social media link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEventSocialMedia {
    /// Platform name.
    pub platform: String,
    /// Link URL.
    pub url: String,
}
