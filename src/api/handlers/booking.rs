use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::dtos::requests::CreateBookingRequest;
use crate::domain::models::booking::NewBooking;
use crate::domain::services::booking_rules::is_bookable;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    // A missing slot and an ineligible slot are deliberately the same rejection.
    let eligible = match state.class_repo.find_slot(payload.class_id).await? {
        Some(class) => is_bookable(&class, Utc::now()),
        None => false,
    };

    if !eligible {
        warn!("Booking rejected for class {}", payload.class_id);
        return Err(AppError::Conflict("This class is not available for booking.".into()));
    }

    let created = state
        .booking_repo
        .create_confirmed(&NewBooking {
            class_id: payload.class_id,
            student_name: payload.student_name,
            student_email: payload.student_email,
            student_phone: payload.student_phone,
            notes: payload.notes,
        })
        .await?;

    info!("Booking confirmed: {} for class {}", created.id, created.class_id);
    Ok(Json(created))
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.booking_repo.cancel(id).await?;
    info!("Booking cancelled: {}", id);
    Ok(Json(serde_json::json!({ "status": "cancelled" })))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

pub async fn list_all_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list_all().await?;
    Ok(Json(bookings))
}
