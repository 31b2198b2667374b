use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest};
use crate::domain::models::class::{LessonClass, NewClass};
use crate::error::AppError;
use crate::state::AppState;

/// Catalog listing: AVAILABLE slots in the future, optionally narrowed to one
/// instrument (exact, case-sensitive) or one skill level.
pub async fn list_classes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClassListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let classes = match (query.instrument, query.level) {
        (Some(instrument), _) => state.class_repo.list_by_instrument(&instrument).await?,
        (None, Some(level)) => state.class_repo.list_by_level(level).await?,
        (None, None) => state.class_repo.list_available().await?,
    };
    Ok(Json(classes))
}

pub async fn get_class(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let class = state
        .class_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Class not found".into()))?;
    Ok(Json(class))
}

pub async fn create_class(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateClassRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state
        .class_repo
        .create(&NewClass {
            instructor_id: payload.instructor_id,
            instrument: payload.instrument,
            level: payload.level,
            scheduled_at: payload.scheduled_at,
            duration_minutes: payload.duration_minutes.unwrap_or(60),
            price_cents: payload.price_cents,
            description: payload.description.unwrap_or_default(),
        })
        .await?;

    info!("Class created: {} ({} at {})", created.id, created.instrument, created.scheduled_at);
    Ok(Json(created))
}

pub async fn update_class(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateClassRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state
        .class_repo
        .update(&LessonClass {
            id,
            instructor_id: payload.instructor_id,
            instrument: payload.instrument,
            level: payload.level,
            scheduled_at: payload.scheduled_at,
            duration_minutes: payload.duration_minutes,
            price_cents: payload.price_cents,
            description: payload.description,
            status: payload.status,
        })
        .await?;

    info!("Class updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_class(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.class_repo.delete(id).await?;
    info!("Class deleted: {}", id);
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

pub async fn list_instruments(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let instruments = state.class_repo.list_instruments().await?;
    Ok(Json(instruments))
}
