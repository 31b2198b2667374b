use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::models::class::{ClassStatus, SkillLevel};

#[derive(Deserialize)]
pub struct CreateInstructorRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub specialization: String,
    pub hourly_rate_cents: i64,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Full-row replace; every field is written as given.
#[derive(Deserialize)]
pub struct UpdateInstructorRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub specialization: String,
    pub hourly_rate_cents: i64,
    pub image_url: Option<String>,
    pub is_active: bool,
}

#[derive(Deserialize)]
pub struct CreateClassRequest {
    pub instructor_id: i64,
    pub instrument: String,
    pub level: SkillLevel,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: Option<i64>,
    pub price_cents: i64,
    pub description: Option<String>,
}

/// Full-row replace, status included; no business validation is applied here.
#[derive(Deserialize)]
pub struct UpdateClassRequest {
    pub instructor_id: i64,
    pub instrument: String,
    pub level: SkillLevel,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i64,
    pub price_cents: i64,
    pub description: String,
    pub status: ClassStatus,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub class_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub student_phone: String,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct ClassListQuery {
    pub instrument: Option<String>,
    pub level: Option<SkillLevel>,
}

#[derive(Deserialize)]
pub struct InstructorListQuery {
    pub active: Option<bool>,
}
