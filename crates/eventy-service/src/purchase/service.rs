//! The purchase transactor.
//!
//! Validates a batch of ticket ids, flips them to sold, and records the
//! sale facts as one atomic unit. The central invariant: no two
//! concurrent purchase invocations may both succeed in selling the same
//! ticket id.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use eventy_core::error::{AppError, ErrorKind};
use eventy_core::result::AppResult;
use eventy_database::repositories::{SoldTicketRepository, TicketRepository, UserRepository};
use eventy_entity::ticket::{PurchaseContactInfo, SoldTicket, Ticket};

use super::contact::{SubmittedContact, consent_update, divergent_contact};

/// A batch purchase request.
#[derive(Debug, Clone)]
pub struct PurchaseOrder {
    /// The tickets to buy. Duplicates are collapsed.
    pub ticket_ids: Vec<Uuid>,
    /// The authenticated buyer.
    pub buyer_id: Uuid,
    /// Opaque payment method tag.
    pub payment_method: String,
    /// Contact details for this purchase, if supplied.
    pub contact_info: Option<SubmittedContact>,
}

/// One (ticket, sale record) pair produced by a successful purchase.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PurchasedTicket {
    /// The ticket, now sold.
    pub ticket: Ticket,
    /// The sale record referencing it.
    pub sold_ticket: SoldTicket,
}

/// The result of a successful purchase.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PurchaseOutcome {
    /// All newly created (ticket, sale) pairs.
    pub purchased: Vec<PurchasedTicket>,
    /// Number of tickets purchased.
    pub total_tickets: u32,
    /// The payment method, echoed back.
    pub payment_method: String,
    /// The contact snapshot, when one was persisted.
    pub contact_info: Option<PurchaseContactInfo>,
}

/// Executes atomic multi-ticket checkouts.
#[derive(Debug, Clone)]
pub struct PurchaseService {
    /// Connection pool; each purchase owns one transaction.
    pool: PgPool,
    /// Ticket repository.
    tickets: Arc<TicketRepository>,
    /// Sale record repository.
    sold_tickets: Arc<SoldTicketRepository>,
    /// User repository.
    users: Arc<UserRepository>,
}

impl PurchaseService {
    /// Create a new purchase service.
    pub fn new(
        pool: PgPool,
        tickets: Arc<TicketRepository>,
        sold_tickets: Arc<SoldTicketRepository>,
        users: Arc<UserRepository>,
    ) -> Self {
        Self {
            pool,
            tickets,
            sold_tickets,
            users,
        }
    }

    /// Purchase a batch of tickets for a buyer.
    ///
    /// All mutations — status flips, sale records, the optional contact
    /// snapshot, and the optional consent update — commit together or not
    /// at all. Concurrent purchasers of the same ticket are serialized by
    /// row-level locks; exactly one of them observes the ticket available.
    ///
    /// Expected failures carry machine-readable details: a not-found error
    /// reports the number of unresolved ids, a conflict names the
    /// already-sold ticket ids so the caller can re-query availability and
    /// retry with a corrected selection. No retry happens here.
    pub async fn purchase(&self, order: PurchaseOrder) -> AppResult<PurchaseOutcome> {
        if order.ticket_ids.is_empty() {
            return Err(AppError::validation("At least one ticket id is required"));
        }

        let mut ticket_ids = order.ticket_ids.clone();
        ticket_ids.sort();
        ticket_ids.dedup();

        let buyer = self
            .users
            .find_by_id(order.buyer_id)
            .await?
            .ok_or_else(|| AppError::not_found("Buyer not found"))?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin purchase transaction", e)
        })?;

        // Row locks serialize concurrent purchasers of the same tickets.
        let locked = self.tickets.lock_for_purchase(&mut tx, &ticket_ids).await?;

        if locked.len() != ticket_ids.len() {
            let missing = ticket_ids.len() - locked.len();
            return Err(AppError::not_found(format!(
                "{missing} ticket(s) could not be found"
            ))
            .with_details(serde_json::json!({ "missing": missing })));
        }

        let sold_ids: Vec<Uuid> = locked
            .iter()
            .filter(|t| !t.status.is_available())
            .map(|t| t.id)
            .collect();
        if !sold_ids.is_empty() {
            return Err(AppError::conflict("Some tickets are already sold")
                .with_details(serde_json::json!({ "sold_ticket_ids": sold_ids })));
        }

        let mut contact_snapshot = None;
        if let Some(submitted) = &order.contact_info {
            if let Some(new_contact) = divergent_contact(&buyer, submitted) {
                let snapshot = self
                    .sold_tickets
                    .insert_contact_info(&mut tx, &new_contact)
                    .await?;
                contact_snapshot = Some(snapshot);
            }

            if let Some(consent) = consent_update(&buyer, submitted) {
                self.users
                    .set_marketing_consent(&mut tx, buyer.id, consent)
                    .await?;
            }
        }

        let contact_info_id = contact_snapshot.as_ref().map(|c| c.id);
        let mut purchased = Vec::with_capacity(locked.len());

        for mut ticket in locked {
            ticket.status = ticket.status.sell().map_err(|_| {
                AppError::conflict(format!("Ticket {} is already sold", ticket.id))
                    .with_details(serde_json::json!({ "sold_ticket_ids": [ticket.id] }))
            })?;

            // The row is locked and was observed available above, so the
            // guarded update must hit exactly one row.
            let updated = self.tickets.mark_sold(&mut tx, ticket.id).await?;
            if updated != 1 {
                return Err(AppError::conflict(format!(
                    "Ticket {} was sold concurrently",
                    ticket.id
                ))
                .with_details(serde_json::json!({ "sold_ticket_ids": [ticket.id] })));
            }

            let sold_ticket = self
                .sold_tickets
                .insert(
                    &mut tx,
                    ticket.id,
                    buyer.id,
                    &order.payment_method,
                    contact_info_id,
                )
                .await?;

            purchased.push(PurchasedTicket {
                ticket,
                sold_ticket,
            });
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit purchase", e)
        })?;

        let total_tickets = purchased.len() as u32;
        tracing::info!(
            buyer_id = %buyer.id,
            tickets = total_tickets,
            payment_method = %order.payment_method,
            "Purchase completed"
        );

        Ok(PurchaseOutcome {
            purchased,
            total_tickets,
            payment_method: order.payment_method,
            contact_info: contact_snapshot,
        })
    }
}
