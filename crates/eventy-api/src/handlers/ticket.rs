//! Availability and purchase handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use eventy_core::error::AppError;
use eventy_service::purchase::contact::SubmittedContact;
use eventy_service::purchase::service::PurchaseOrder;

use crate::dto::request::{AvailabilityQuery, PurchaseRequest};
use crate::dto::response::{ApiResponse, AvailableTicketResponse, PurchaseResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/tickets/event/{event_id}
pub async fn list_available(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<Vec<AvailableTicketResponse>>>, ApiError> {
    let tickets = state
        .availability_service
        .list_available(event_id, query.zone_id, query.date_id)
        .await?;

    Ok(Json(ApiResponse::ok(
        tickets.into_iter().map(AvailableTicketResponse::from).collect(),
    )))
}

/// POST /api/tickets/purchase
pub async fn purchase(
    State(state): State<AppState>,
    Json(req): Json<PurchaseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PurchaseResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state
        .purchase_service
        .purchase(PurchaseOrder {
            ticket_ids: req.ticket_ids,
            buyer_id: req.buyer_id,
            payment_method: req.payment_method,
            contact_info: req.contact_info.map(|c| SubmittedContact {
                name: c.name,
                email: c.email,
                phone: c.phone,
                agree_to_terms: c.agree_to_terms,
                marketing_consent: c.marketing_consent,
            }),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(PurchaseResponse::from(outcome))),
    ))
}
