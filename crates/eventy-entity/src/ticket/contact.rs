//! Purchase contact info snapshot entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Snapshot of the contact details used for a purchase, persisted only
/// when they diverge from the buyer's profile. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PurchaseContactInfo {
    /// Unique snapshot identifier.
    pub id: Uuid,
    /// Contact name used for the purchase.
    pub name: String,
    /// Contact email used for the purchase.
    pub email: String,
    /// Contact phone used for the purchase.
    pub phone: String,
    /// Terms-of-service agreement flag.
    pub agree_to_terms: bool,
    /// Marketing-consent flag as submitted, if any.
    pub marketing_consent: Option<bool>,
    /// When the snapshot was written.
    pub created_at: DateTime<Utc>,
}

/// Data for a contact snapshot that is about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactInfo {
    /// Contact name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Terms-of-service agreement flag.
    pub agree_to_terms: bool,
    /// Marketing-consent flag as submitted, if any.
    pub marketing_consent: Option<bool>,
}
