//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use eventy_entity::ticket::AvailableTicket;
use eventy_entity::user::User;
use eventy_service::purchase::service::PurchaseOutcome;

/// Standard success response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// User profile as exposed over the API.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub user_name: String,
    pub user_surname: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub marketing_consent: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            user_surname: user.user_surname,
            email: user.email,
            phone_number: user.phone_number,
            marketing_consent: user.marketing_consent,
            created_at: user.created_at,
        }
    }
}

/// Result of a completed batch purchase.
#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    /// The tickets now owned by the buyer.
    pub purchased: Vec<PurchasedTicketResponse>,
    /// How many tickets the purchase covered.
    pub total_tickets: u32,
    /// Payment method echoed back.
    pub payment_method: String,
    /// Id of the contact-info snapshot, when one was recorded.
    pub contact_info_id: Option<Uuid>,
}

/// One ticket within a purchase result.
#[derive(Debug, Serialize)]
pub struct PurchasedTicketResponse {
    pub ticket_id: Uuid,
    pub sold_ticket_id: Uuid,
    pub seat_number: i32,
}

impl From<PurchaseOutcome> for PurchaseResponse {
    fn from(outcome: PurchaseOutcome) -> Self {
        Self {
            purchased: outcome
                .purchased
                .into_iter()
                .map(|p| PurchasedTicketResponse {
                    ticket_id: p.ticket.id,
                    sold_ticket_id: p.sold_ticket.id,
                    seat_number: p.ticket.seat_number,
                })
                .collect(),
            total_tickets: outcome.total_tickets,
            payment_method: outcome.payment_method,
            contact_info_id: outcome.contact_info.map(|c| c.id),
        }
    }
}

/// One available ticket in a listing.
#[derive(Debug, Serialize)]
pub struct AvailableTicketResponse {
    pub ticket_id: Uuid,
    pub event_zone_id: Uuid,
    pub zone_name: String,
    pub event_date_id: Uuid,
    pub date: DateTime<Utc>,
    pub seat_number: i32,
}

impl From<AvailableTicket> for AvailableTicketResponse {
    fn from(t: AvailableTicket) -> Self {
        Self {
            ticket_id: t.ticket_id,
            event_zone_id: t.event_zone_id,
            zone_name: t.zone_name,
            event_date_id: t.event_date_id,
            date: t.date,
            seat_number: t.seat_number,
        }
    }
}

/// Answer to a delete-feasibility probe.
#[derive(Debug, Serialize)]
pub struct DeletableResponse {
    /// Whether the event can currently be deleted.
    pub deletable: bool,
}

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health probe result.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: &'static str,
    /// Database reachability.
    pub database: &'static str,
}
