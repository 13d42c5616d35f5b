//! Route definitions for the Eventy HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(user_routes())
        .merge(event_routes())
        .merge(ticket_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// User registration, profile, and purchase history
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::create_user))
        .route("/users/{id}", get(handlers::user::get_user))
        .route("/users/{id}/tickets", get(handlers::user::user_tickets))
}

/// Event catalogue and lifecycle
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(handlers::event::create_event))
        .route("/events", get(handlers::event::list_events))
        .route("/events/{id}", get(handlers::event::get_event))
        .route("/events/{id}", delete(handlers::event::delete_event))
        .route("/events/{id}/sales", get(handlers::event::event_sales))
        .route(
            "/events/{id}/deletable",
            get(handlers::event::event_deletable),
        )
}

/// Availability listing and batch purchase
fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tickets/event/{event_id}",
            get(handlers::ticket::list_available),
        )
        .route("/tickets/purchase", post(handlers::ticket::purchase))
}

/// Health probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
