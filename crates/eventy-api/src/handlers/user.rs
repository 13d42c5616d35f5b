//! User handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use eventy_core::error::AppError;
use eventy_entity::ticket::BuyerTicket;
use eventy_entity::user::CreateUser;

use crate::dto::request::CreateUserRequest;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .create_user(CreateUser {
            user_name: req.user_name,
            user_surname: req.user_surname,
            email: req.email,
            phone_number: req.phone_number,
            marketing_consent: req.marketing_consent,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from(user))),
    ))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// GET /api/users/{id}/tickets
pub async fn user_tickets(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<BuyerTicket>>>, ApiError> {
    let tickets = state.user_service.user_tickets(id).await?;
    Ok(Json(ApiResponse::ok(tickets)))
}
