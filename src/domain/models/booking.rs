use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A student's reservation against exactly one lesson slot.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: i64,
    pub class_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub student_phone: String,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub booked_at: DateTime<Utc>,
}

pub struct NewBooking {
    pub class_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub student_phone: String,
    pub notes: Option<String>,
}

/// Ledger read model: a booking joined with its class and that class's instructor.
#[derive(Debug, Serialize, Clone)]
pub struct BookingDetail {
    #[serde(flatten)]
    pub booking: Booking,
    pub class: crate::domain::models::class::LessonClass,
    pub instructor: crate::domain::models::instructor::Instructor,
}
