//! Purchase transactor: atomic multi-ticket checkout.

pub mod contact;
pub mod service;

pub use contact::{SubmittedContact, consent_update, divergent_contact};
pub use service::{PurchaseOrder, PurchaseOutcome, PurchaseService, PurchasedTicket};
