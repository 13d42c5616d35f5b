//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Create user request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Given name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub user_name: String,
    /// Surname.
    #[validate(length(min = 1, message = "Surname is required"))]
    pub user_surname: String,
    /// Email address.
    #[validate(email)]
    pub email: String,
    /// Phone number (optional).
    pub phone_number: Option<String>,
    /// Initial marketing-consent flag.
    #[serde(default)]
    pub marketing_consent: bool,
}

/// Composite event creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    /// The organizer who owns the event.
    pub owner_id: Uuid,
    /// Event title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Long description (optional).
    pub description: Option<String>,
    /// Venue / location text.
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    /// Cover image reference.
    pub cover_img: Option<String>,
    /// Logo image reference.
    pub logo_img: Option<String>,
    /// Main image reference.
    pub main_img: Option<String>,
    /// Scheduled occurrences.
    #[validate(length(min = 1, message = "At least one date is required"))]
    pub dates: Vec<EventDateRequest>,
    /// Pricing zones.
    #[validate(length(min = 1, message = "At least one zone is required"), nested)]
    pub zones: Vec<EventZoneRequest>,
    /// Social media links.
    #[serde(default)]
    #[validate(nested)]
    pub social_media: Vec<SocialMediaRequest>,
}

/// One scheduled occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDateRequest {
    /// When this occurrence takes place.
    pub date: DateTime<Utc>,
}

/// One pricing zone.
///
/// Seat counts are validated here, at the boundary: the inventory
/// generator itself trusts its inputs.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventZoneRequest {
    /// Tier name.
    #[validate(length(min = 1, message = "Zone name is required"))]
    pub name: String,
    /// Unit price for one seat.
    pub price: Decimal,
    /// ISO currency code.
    #[validate(length(equal = 3, message = "Currency must be a 3-letter code"))]
    pub currency: String,
    /// Number of seats in this zone per date.
    #[validate(range(min = 1, message = "Seat count must be positive"))]
    pub seat_count: i32,
}

/// One social media link.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SocialMediaRequest {
    /// Platform name.
    #[validate(length(min = 1, message = "Platform is required"))]
    pub platform: String,
    /// Link URL.
    #[validate(url)]
    pub url: String,
}

/// Batch purchase request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PurchaseRequest {
    /// The tickets to buy.
    #[validate(length(min = 1, message = "At least one ticket id is required"))]
    pub ticket_ids: Vec<Uuid>,
    /// The buyer, as supplied by the identity provider.
    pub buyer_id: Uuid,
    /// Opaque payment method tag.
    #[validate(length(min = 1, message = "Payment method is required"))]
    pub payment_method: String,
    /// Contact details for this purchase, if different from the profile.
    #[validate(nested)]
    pub contact_info: Option<ContactInfoRequest>,
}

/// Contact details submitted with a purchase.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactInfoRequest {
    /// Contact name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Contact email.
    #[validate(email)]
    pub email: String,
    /// Contact phone.
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    /// Terms-of-service agreement flag.
    pub agree_to_terms: bool,
    /// Marketing-consent flag, if expressed.
    pub marketing_consent: Option<bool>,
}

/// Query parameters narrowing an availability listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// Narrow to one zone.
    pub zone_id: Option<Uuid>,
    /// Narrow to one date.
    pub date_id: Option<Uuid>,
}
