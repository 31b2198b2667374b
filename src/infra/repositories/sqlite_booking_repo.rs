use crate::domain::models::booking::{Booking, BookingDetail, BookingStatus, NewBooking};
use crate::domain::models::class::ClassStatus;
use crate::domain::ports::BookingRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use super::row_mappers::booking_detail;

fn ledger_select(filter: &str) -> String {
    format!(
        "SELECT b.id, b.class_id, b.student_name, b.student_email, b.student_phone,
                b.notes, b.status, b.booked_at,
                c.instructor_id AS class_instructor_id, c.instrument AS class_instrument,
                c.level AS class_level, c.scheduled_at AS class_scheduled_at,
                c.duration_minutes AS class_duration_minutes, c.price_cents AS class_price_cents,
                c.description AS class_description, c.status AS class_status,
                i.name AS instructor_name, i.email AS instructor_email,
                i.phone AS instructor_phone, i.bio AS instructor_bio,
                i.specialization AS instructor_specialization,
                i.hourly_rate_cents AS instructor_hourly_rate_cents,
                i.image_url AS instructor_image_url, i.is_active AS instructor_is_active
         FROM bookings b
         JOIN classes c ON c.id = b.class_id
         JOIN instructors i ON i.id = c.instructor_id
         {filter}
         ORDER BY b.booked_at DESC"
    )
}

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create_confirmed(&self, booking: &NewBooking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (class_id, student_name, student_email, student_phone, notes, status, booked_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(booking.class_id)
        .bind(&booking.student_name)
        .bind(&booking.student_email)
        .bind(&booking.student_phone)
        .bind(&booking.notes)
        .bind(BookingStatus::Confirmed)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        sqlx::query("UPDATE classes SET status = ? WHERE id = ?")
            .bind(ClassStatus::Booked)
            .bind(booking.class_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn cancel(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let class_id: Option<i64> = sqlx::query_scalar("SELECT class_id FROM bookings WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        // Cancelling something that was never booked is not an error.
        let Some(class_id) = class_id else {
            return Ok(());
        };

        sqlx::query("UPDATE bookings SET status = ? WHERE id = ?")
            .bind(BookingStatus::Cancelled)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        // The slot is reopened without inspecting its current status, even if
        // the class moved to CANCELLED or COMPLETED in the meantime.
        sqlx::query("UPDATE classes SET status = ? WHERE id = ?")
            .bind(ClassStatus::Available)
            .bind(class_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BookingDetail>, AppError> {
        sqlx::query(&ledger_select("WHERE b.id = ?"))
            .bind(id)
            .try_map(|row| booking_detail(&row))
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<BookingDetail>, AppError> {
        sqlx::query(&ledger_select(""))
            .try_map(|row| booking_detail(&row))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_instructor(&self, instructor_id: i64) -> Result<Vec<BookingDetail>, AppError> {
        sqlx::query(&ledger_select("WHERE c.instructor_id = ?"))
            .bind(instructor_id)
            .try_map(|row| booking_detail(&row))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
