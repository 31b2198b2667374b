use crate::domain::models::class::{ClassDetail, ClassStatus, ClassWithInstructor, LessonClass, NewClass, SkillLevel};
use crate::domain::ports::ClassRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use super::row_mappers::{class_detail, class_with_instructor};

const INSTRUCTOR_COLUMNS: &str = "i.name AS instructor_name, i.email AS instructor_email, \
     i.phone AS instructor_phone, i.bio AS instructor_bio, \
     i.specialization AS instructor_specialization, \
     i.hourly_rate_cents AS instructor_hourly_rate_cents, \
     i.image_url AS instructor_image_url, i.is_active AS instructor_is_active";

const BOOKING_COLUMNS: &str = "b.id AS booking_id, b.student_name AS booking_student_name, \
     b.student_email AS booking_student_email, b.student_phone AS booking_student_phone, \
     b.notes AS booking_notes, b.status AS booking_status, b.booked_at AS booking_booked_at";

fn catalog_select(filter: &str) -> String {
    format!(
        "SELECT c.*, {INSTRUCTOR_COLUMNS}
         FROM classes c
         JOIN instructors i ON i.id = c.instructor_id
         WHERE {filter}
         ORDER BY c.scheduled_at ASC"
    )
}

fn detail_select(filter: &str, order: &str) -> String {
    format!(
        "SELECT c.*, {INSTRUCTOR_COLUMNS}, {BOOKING_COLUMNS}
         FROM classes c
         JOIN instructors i ON i.id = c.instructor_id
         LEFT JOIN bookings b ON b.class_id = c.id
         WHERE {filter}{order}"
    )
}

pub struct SqliteClassRepo {
    pool: SqlitePool,
}

impl SqliteClassRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassRepository for SqliteClassRepo {
    async fn create(&self, class: &NewClass) -> Result<LessonClass, AppError> {
        sqlx::query_as::<_, LessonClass>(
            "INSERT INTO classes (instructor_id, instrument, level, scheduled_at, duration_minutes, price_cents, description, status)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(class.instructor_id)
        .bind(&class.instrument)
        .bind(class.level)
        .bind(class.scheduled_at)
        .bind(class.duration_minutes)
        .bind(class.price_cents)
        .bind(&class.description)
        .bind(ClassStatus::Available)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ClassDetail>, AppError> {
        sqlx::query(&detail_select("c.id = ?", ""))
            .bind(id)
            .try_map(|row| class_detail(&row))
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_slot(&self, id: i64) -> Result<Option<LessonClass>, AppError> {
        sqlx::query_as::<_, LessonClass>("SELECT * FROM classes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_available(&self) -> Result<Vec<ClassWithInstructor>, AppError> {
        sqlx::query(&catalog_select("c.status = ? AND c.scheduled_at > ?"))
            .bind(ClassStatus::Available)
            .bind(Utc::now())
            .try_map(|row| class_with_instructor(&row))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_instrument(&self, instrument: &str) -> Result<Vec<ClassWithInstructor>, AppError> {
        sqlx::query(&catalog_select("c.instrument = ? AND c.status = ? AND c.scheduled_at > ?"))
            .bind(instrument)
            .bind(ClassStatus::Available)
            .bind(Utc::now())
            .try_map(|row| class_with_instructor(&row))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_level(&self, level: SkillLevel) -> Result<Vec<ClassWithInstructor>, AppError> {
        sqlx::query(&catalog_select("c.level = ? AND c.status = ? AND c.scheduled_at > ?"))
            .bind(level)
            .bind(ClassStatus::Available)
            .bind(Utc::now())
            .try_map(|row| class_with_instructor(&row))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_instructor(&self, instructor_id: i64) -> Result<Vec<ClassDetail>, AppError> {
        sqlx::query(&detail_select(
            "c.instructor_id = ? AND c.scheduled_at > ?",
            " ORDER BY c.scheduled_at ASC",
        ))
        .bind(instructor_id)
        .bind(Utc::now())
        .try_map(|row| class_detail(&row))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_owned(&self, instructor_id: i64) -> Result<Vec<LessonClass>, AppError> {
        sqlx::query_as::<_, LessonClass>(
            "SELECT * FROM classes WHERE instructor_id = ? ORDER BY scheduled_at ASC",
        )
        .bind(instructor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_instruments(&self) -> Result<Vec<String>, AppError> {
        // DISTINCT under the default BINARY collation, so case-sensitive.
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT instrument FROM classes
             WHERE status = ? AND scheduled_at > ?
             ORDER BY instrument ASC",
        )
        .bind(ClassStatus::Available)
        .bind(Utc::now())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update(&self, class: &LessonClass) -> Result<LessonClass, AppError> {
        sqlx::query_as::<_, LessonClass>(
            "UPDATE classes
             SET instructor_id = ?, instrument = ?, level = ?, scheduled_at = ?,
                 duration_minutes = ?, price_cents = ?, description = ?, status = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(class.instructor_id)
        .bind(&class.instrument)
        .bind(class.level)
        .bind(class.scheduled_at)
        .bind(class.duration_minutes)
        .bind(class.price_cents)
        .bind(&class.description)
        .bind(class.status)
        .bind(class.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound("Class not found".into()))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM classes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
