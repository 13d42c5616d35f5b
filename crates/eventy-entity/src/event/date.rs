//! Event date entity: one scheduled occurrence of an event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One scheduled occurrence of an event.
///
/// Immutable once created; changing dates means a full event edit.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventDate {
    /// Unique date identifier.
    pub id: Uuid,
    /// The owning event.
    pub event_id: Uuid,
    /// When this occurrence takes place.
    pub date: DateTime<Utc>,
}

/// Data for creating an event date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEventDate {
    /// When this occurrence takes place.
    pub date: DateTime<Utc>,
}
