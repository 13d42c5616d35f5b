//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user. Users buy tickets and own events.
///
/// Authentication is handled by an external identity provider; this
/// profile only carries the fields the purchase engine needs (contact
/// details and the marketing-consent flag).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Given name.
    pub user_name: String,
    /// Surname.
    pub user_surname: String,
    /// Email address (unique).
    pub email: String,
    /// Phone number (optional).
    pub phone_number: Option<String>,
    /// Whether the user has opted into marketing communication.
    pub marketing_consent: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The full display name, as compared against purchase contact info.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.user_name, self.user_surname)
    }
}

/// Data required to create a new user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Given name.
    pub user_name: String,
    /// Surname.
    pub user_surname: String,
    /// Email address.
    pub email: String,
    /// Phone number (optional).
    pub phone_number: Option<String>,
    /// Initial marketing-consent flag.
    pub marketing_consent: bool,
}
