//! Ticket status state machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle state of a ticket.
///
/// The only legal transition is `Available → Sold`, expressed by
/// [`TicketStatus::sell`]. A sold ticket never reverts (there is no
/// cancellation flow), so no other transition method exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ticket_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    /// The ticket can be purchased.
    Available,
    /// The ticket has been purchased; a sale record references it.
    Sold,
}

/// Error returned when an illegal status transition is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ticket is already sold")]
pub struct InvalidTransition;

impl TicketStatus {
    /// Attempt the `Available → Sold` transition.
    pub fn sell(self) -> Result<TicketStatus, InvalidTransition> {
        match self {
            Self::Available => Ok(Self::Sold),
            Self::Sold => Err(InvalidTransition),
        }
    }

    /// Whether the ticket can currently be purchased.
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Sold => write!(f, "sold"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_sells_once() {
        let status = TicketStatus::Available;
        assert_eq!(status.sell(), Ok(TicketStatus::Sold));
    }

    #[test]
    fn test_sold_cannot_sell_again() {
        let status = TicketStatus::Sold;
        assert_eq!(status.sell(), Err(InvalidTransition));
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::Available).unwrap(),
            "\"available\""
        );
        let parsed: TicketStatus = serde_json::from_str("\"sold\"").unwrap();
        assert_eq!(parsed, TicketStatus::Sold);
    }
}
