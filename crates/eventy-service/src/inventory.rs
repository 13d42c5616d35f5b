//! Ticket inventory generation.
//!
//! Runs once at event creation: for every zone × date pair the generator
//! materializes `seat_count` ticket rows, seat numbers `1..=seat_count`,
//! all available. The caller passes the event-creation transaction's
//! connection, so a failure here rolls back the whole event.

use std::sync::Arc;

use sqlx::PgConnection;

use eventy_core::error::{AppError, ErrorKind};
use eventy_core::result::AppResult;
use eventy_database::repositories::TicketRepository;
use eventy_entity::event::{EventDate, EventZone};
use eventy_entity::ticket::TicketSeed;

/// Compute the full seat plan for the given zones and dates.
///
/// Deterministic: the output depends only on the inputs (no clocks, no
/// randomness), so "seat 12 of zone A on date 3" is a stable identity.
/// Ordering across zones/dates carries no meaning.
pub fn seat_plan(zones: &[EventZone], dates: &[EventDate]) -> Vec<TicketSeed> {
    let mut plan = Vec::new();
    for zone in zones {
        for date in dates {
            for seat_number in 1..=zone.seat_count {
                plan.push(TicketSeed {
                    event_zone_id: zone.id,
                    event_date_id: date.id,
                    seat_number,
                });
            }
        }
    }
    plan
}

/// Materializes the fixed-size seat inventory for new events.
#[derive(Debug, Clone)]
pub struct InventoryGenerator {
    /// Ticket repository.
    tickets: Arc<TicketRepository>,
}

impl InventoryGenerator {
    /// Create a new inventory generator.
    pub fn new(tickets: Arc<TicketRepository>) -> Self {
        Self { tickets }
    }

    /// Generate all tickets for the given zones and dates within the
    /// caller-owned transaction.
    ///
    /// Fails loudly with a generation error rather than leaving a
    /// partially stocked event; the caller's transaction rollback
    /// discards whatever part of the plan was already inserted.
    pub async fn generate(
        &self,
        conn: &mut PgConnection,
        zones: &[EventZone],
        dates: &[EventDate],
    ) -> AppResult<u64> {
        let plan = seat_plan(zones, dates);
        let expected = plan.len() as u64;

        let inserted = self
            .tickets
            .insert_seeds(conn, &plan)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Generation,
                    "Failed to generate ticket inventory",
                    e,
                )
            })?;

        if inserted != expected {
            return Err(AppError::generation(format!(
                "Planned {expected} tickets but inserted {inserted}"
            )));
        }

        tracing::info!(
            tickets = inserted,
            zones = zones.len(),
            dates = dates.len(),
            "Generated ticket inventory"
        );

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use std::collections::HashSet;
    use uuid::Uuid;

    fn zone(seat_count: i32) -> EventZone {
        EventZone {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            name: "VIP".to_string(),
            price: Decimal::new(5000, 2),
            currency: "EUR".to_string(),
            seat_count,
        }
    }

    fn date() -> EventDate {
        EventDate {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            date: Utc::now(),
        }
    }

    #[test]
    fn test_plan_covers_every_pair_completely() {
        let zones = vec![zone(3), zone(2)];
        let dates = vec![date(), date()];

        let plan = seat_plan(&zones, &dates);
        assert_eq!(plan.len(), (3 + 2) * 2);

        for z in &zones {
            for d in &dates {
                let seats: HashSet<i32> = plan
                    .iter()
                    .filter(|s| s.event_zone_id == z.id && s.event_date_id == d.id)
                    .map(|s| s.seat_number)
                    .collect();
                let expected: HashSet<i32> = (1..=z.seat_count).collect();
                assert_eq!(seats, expected, "seats must be 1..=seat_count, no gaps");
            }
        }
    }

    #[test]
    fn test_plan_is_deterministic() {
        let zones = vec![zone(4)];
        let dates = vec![date(), date(), date()];

        let first = seat_plan(&zones, &dates);
        let second = seat_plan(&zones, &dates);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_inputs_produce_empty_plan() {
        assert!(seat_plan(&[], &[date()]).is_empty());
        assert!(seat_plan(&[zone(5)], &[]).is_empty());
        assert!(seat_plan(&[zone(0)], &[date()]).is_empty());
    }
}
