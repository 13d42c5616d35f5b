//! Ticket inventory entities: tickets, their status state machine, sale
//! records, and purchase contact snapshots.

pub mod contact;
pub mod model;
pub mod sold;
pub mod status;

pub use contact::{NewContactInfo, PurchaseContactInfo};
pub use model::{AvailableTicket, Ticket, TicketSeed};
pub use sold::{BuyerTicket, SaleRecord, SoldTicket};
pub use status::{InvalidTransition, TicketStatus};
