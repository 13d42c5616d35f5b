//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use eventy_core::config::AppConfig;
use eventy_database::repositories::{EventRepository, SoldTicketRepository, TicketRepository,
    UserRepository};
use eventy_service::availability::AvailabilityService;
use eventy_service::event::EventService;
use eventy_service::inventory::InventoryGenerator;
use eventy_service::lifecycle::EventLifecycleService;
use eventy_service::purchase::PurchaseService;
use eventy_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// User profile service.
    pub user_service: Arc<UserService>,
    /// Event catalogue service.
    pub event_service: Arc<EventService>,
    /// Availability query service.
    pub availability_service: Arc<AvailabilityService>,
    /// Purchase transactor.
    pub purchase_service: Arc<PurchaseService>,
    /// Event lifecycle guard.
    pub lifecycle_service: Arc<EventLifecycleService>,
}

impl AppState {
    /// Wire repositories and services on top of a connection pool.
    pub fn build(config: Arc<AppConfig>, db_pool: PgPool) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let event_repo = Arc::new(EventRepository::new(db_pool.clone()));
        let ticket_repo = Arc::new(TicketRepository::new(db_pool.clone()));
        let sold_ticket_repo = Arc::new(SoldTicketRepository::new(db_pool.clone()));

        let inventory = InventoryGenerator::new(Arc::clone(&ticket_repo));

        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&sold_ticket_repo),
        ));
        let event_service = Arc::new(EventService::new(
            db_pool.clone(),
            Arc::clone(&event_repo),
            Arc::clone(&sold_ticket_repo),
            Arc::clone(&user_repo),
            inventory,
        ));
        let availability_service = Arc::new(AvailabilityService::new(
            Arc::clone(&event_repo),
            Arc::clone(&ticket_repo),
        ));
        let purchase_service = Arc::new(PurchaseService::new(
            db_pool.clone(),
            Arc::clone(&ticket_repo),
            Arc::clone(&sold_ticket_repo),
            Arc::clone(&user_repo),
        ));
        let lifecycle_service = Arc::new(EventLifecycleService::new(
            db_pool.clone(),
            Arc::clone(&event_repo),
        ));

        Self {
            config,
            db_pool,
            user_service,
            event_service,
            availability_service,
            purchase_service,
            lifecycle_service,
        }
    }
}
