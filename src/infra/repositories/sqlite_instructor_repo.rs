use crate::domain::models::instructor::{Instructor, NewInstructor};
use crate::domain::ports::InstructorRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteInstructorRepo {
    pool: SqlitePool,
}

impl SqliteInstructorRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InstructorRepository for SqliteInstructorRepo {
    async fn create(&self, instructor: &NewInstructor) -> Result<Instructor, AppError> {
        sqlx::query_as::<_, Instructor>(
            "INSERT INTO instructors (name, email, phone, bio, specialization, hourly_rate_cents, image_url, is_active)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&instructor.name)
        .bind(&instructor.email)
        .bind(&instructor.phone)
        .bind(&instructor.bio)
        .bind(&instructor.specialization)
        .bind(instructor.hourly_rate_cents)
        .bind(&instructor.image_url)
        .bind(instructor.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Instructor>, AppError> {
        sqlx::query_as::<_, Instructor>("SELECT * FROM instructors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Instructor>, AppError> {
        sqlx::query_as::<_, Instructor>("SELECT * FROM instructors ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_active(&self) -> Result<Vec<Instructor>, AppError> {
        sqlx::query_as::<_, Instructor>("SELECT * FROM instructors WHERE is_active = 1 ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, instructor: &Instructor) -> Result<Instructor, AppError> {
        sqlx::query_as::<_, Instructor>(
            "UPDATE instructors
             SET name = ?, email = ?, phone = ?, bio = ?, specialization = ?,
                 hourly_rate_cents = ?, image_url = ?, is_active = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(&instructor.name)
        .bind(&instructor.email)
        .bind(&instructor.phone)
        .bind(&instructor.bio)
        .bind(&instructor.specialization)
        .bind(instructor.hourly_rate_cents)
        .bind(&instructor.image_url)
        .bind(instructor.is_active)
        .bind(instructor.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound("Instructor not found".into()))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        // Absent ids are fine; a foreign key violation from owned classes is not
        // translated and bubbles up as the raw store error.
        sqlx::query("DELETE FROM instructors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
