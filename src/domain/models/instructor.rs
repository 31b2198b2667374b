use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Instructor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    /// Comma-separated list of instruments, free text.
    pub specialization: String,
    pub hourly_rate_cents: i64,
    pub image_url: Option<String>,
    pub is_active: bool,
}

pub struct NewInstructor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub specialization: String,
    pub hourly_rate_cents: i64,
    pub image_url: Option<String>,
    pub is_active: bool,
}
