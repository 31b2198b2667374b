use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateInstructorRequest, InstructorListQuery, UpdateInstructorRequest};
use crate::api::dtos::responses::InstructorDetail;
use crate::domain::models::instructor::{Instructor, NewInstructor};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_instructors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InstructorListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let instructors = if query.active.unwrap_or(false) {
        state.instructor_repo.list_active().await?
    } else {
        state.instructor_repo.list().await?
    };
    Ok(Json(instructors))
}

pub async fn get_instructor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let instructor = state
        .instructor_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Instructor not found".into()))?;

    let classes = state.class_repo.list_owned(id).await?;
    Ok(Json(InstructorDetail { instructor, classes }))
}

pub async fn create_instructor(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateInstructorRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state
        .instructor_repo
        .create(&NewInstructor {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            bio: payload.bio,
            specialization: payload.specialization,
            hourly_rate_cents: payload.hourly_rate_cents,
            image_url: payload.image_url,
            is_active: payload.is_active.unwrap_or(true),
        })
        .await?;

    info!("Instructor created: {} ({})", created.id, created.name);
    Ok(Json(created))
}

pub async fn update_instructor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateInstructorRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state
        .instructor_repo
        .update(&Instructor {
            id,
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            bio: payload.bio,
            specialization: payload.specialization,
            hourly_rate_cents: payload.hourly_rate_cents,
            image_url: payload.image_url,
            is_active: payload.is_active,
        })
        .await?;

    info!("Instructor updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_instructor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.instructor_repo.delete(id).await?;
    info!("Instructor deleted: {}", id);
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

pub async fn list_instructor_classes(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let classes = state.class_repo.list_by_instructor(id).await?;
    Ok(Json(classes))
}

pub async fn list_instructor_bookings(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list_by_instructor(id).await?;
    Ok(Json(bookings))
}
