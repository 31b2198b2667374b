use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum ClassStatus {
    Available,
    Booked,
    Cancelled,
    Completed,
}

/// A scheduled, priced lesson slot offered by one instructor.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct LessonClass {
    pub id: i64,
    pub instructor_id: i64,
    pub instrument: String,
    pub level: SkillLevel,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i64,
    pub price_cents: i64,
    pub description: String,
    pub status: ClassStatus,
}

pub struct NewClass {
    pub instructor_id: i64,
    pub instrument: String,
    pub level: SkillLevel,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i64,
    pub price_cents: i64,
    pub description: String,
}

/// Catalog read model: a slot joined with its owning instructor.
#[derive(Debug, Serialize, Clone)]
pub struct ClassWithInstructor {
    #[serde(flatten)]
    pub class: LessonClass,
    pub instructor: crate::domain::models::instructor::Instructor,
}

/// Full read model: slot, owning instructor and the booking held against it, if any.
#[derive(Debug, Serialize, Clone)]
pub struct ClassDetail {
    #[serde(flatten)]
    pub class: LessonClass,
    pub instructor: crate::domain::models::instructor::Instructor,
    pub booking: Option<crate::domain::models::booking::Booking>,
}
