//! Event catalogue and lifecycle handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use eventy_core::error::AppError;
use eventy_core::types::pagination::{PageRequest, PageResponse};
use eventy_entity::event::{
    Event, EventDetails, NewEvent, NewEventDate, NewEventSocialMedia, NewEventZone,
};
use eventy_entity::ticket::SaleRecord;
use eventy_service::event::CreateEventData;

use crate::dto::request::CreateEventRequest;
use crate::dto::response::{ApiResponse, DeletableResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/events
///
/// Creates the event together with its dates, zones, social links and the
/// full ticket inventory, all in one transaction.
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EventDetails>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let details = state
        .event_service
        .create_event(CreateEventData {
            event: NewEvent {
                owner_id: req.owner_id,
                title: req.title,
                description: req.description,
                location: req.location,
                cover_img: req.cover_img,
                logo_img: req.logo_img,
                main_img: req.main_img,
            },
            dates: req
                .dates
                .into_iter()
                .map(|d| NewEventDate { date: d.date })
                .collect(),
            zones: req
                .zones
                .into_iter()
                .map(|z| NewEventZone {
                    name: z.name,
                    price: z.price,
                    currency: z.currency,
                    seat_count: z.seat_count,
                })
                .collect(),
            social_media: req
                .social_media
                .into_iter()
                .map(|s| NewEventSocialMedia {
                    platform: s.platform,
                    url: s.url,
                })
                .collect(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(details))))
}

/// GET /api/events?page=...&page_size=...
pub async fn list_events(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<ApiResponse<PageResponse<Event>>>, ApiError> {
    let page = PageRequest::new(page.page, page.page_size);
    let events = state.event_service.list_events(page).await?;
    Ok(Json(ApiResponse::ok(events)))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EventDetails>>, ApiError> {
    let details = state.event_service.get_event(id).await?;
    Ok(Json(ApiResponse::ok(details)))
}

/// GET /api/events/{id}/sales
pub async fn event_sales(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<SaleRecord>>>, ApiError> {
    let sales = state.event_service.event_sales(id).await?;
    Ok(Json(ApiResponse::ok(sales)))
}

/// GET /api/events/{id}/deletable
pub async fn event_deletable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeletableResponse>>, ApiError> {
    let deletable = state.lifecycle_service.can_delete(id).await?;
    Ok(Json(ApiResponse::ok(DeletableResponse { deletable })))
}

/// DELETE /api/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.lifecycle_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Event deleted",
    ))))
}
