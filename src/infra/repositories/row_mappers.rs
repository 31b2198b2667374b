//! Column mapping for the joined read models.
//!
//! The expanded listings come back as one flat row per hit; booking columns
//! keep their plain names, joined class and instructor columns carry a
//! `class_` / `instructor_` prefix where they would otherwise collide.

use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::{
    booking::{Booking, BookingDetail},
    class::{ClassDetail, ClassWithInstructor, LessonClass},
    instructor::Instructor,
};

pub(super) fn instructor_from_prefixed(row: &SqliteRow, id_column: &str) -> Result<Instructor, sqlx::Error> {
    Ok(Instructor {
        id: row.try_get(id_column)?,
        name: row.try_get("instructor_name")?,
        email: row.try_get("instructor_email")?,
        phone: row.try_get("instructor_phone")?,
        bio: row.try_get("instructor_bio")?,
        specialization: row.try_get("instructor_specialization")?,
        hourly_rate_cents: row.try_get("instructor_hourly_rate_cents")?,
        image_url: row.try_get("instructor_image_url")?,
        is_active: row.try_get("instructor_is_active")?,
    })
}

fn class_from_plain(row: &SqliteRow) -> Result<LessonClass, sqlx::Error> {
    Ok(LessonClass {
        id: row.try_get("id")?,
        instructor_id: row.try_get("instructor_id")?,
        instrument: row.try_get("instrument")?,
        level: row.try_get("level")?,
        scheduled_at: row.try_get("scheduled_at")?,
        duration_minutes: row.try_get("duration_minutes")?,
        price_cents: row.try_get("price_cents")?,
        description: row.try_get("description")?,
        status: row.try_get("status")?,
    })
}

fn booking_from_prefixed(row: &SqliteRow) -> Result<Option<Booking>, sqlx::Error> {
    let id: Option<i64> = row.try_get("booking_id")?;
    let Some(id) = id else {
        return Ok(None);
    };
    Ok(Some(Booking {
        id,
        class_id: row.try_get("id")?,
        student_name: row.try_get("booking_student_name")?,
        student_email: row.try_get("booking_student_email")?,
        student_phone: row.try_get("booking_student_phone")?,
        notes: row.try_get("booking_notes")?,
        status: row.try_get("booking_status")?,
        booked_at: row.try_get("booking_booked_at")?,
    }))
}

pub(super) fn class_with_instructor(row: &SqliteRow) -> Result<ClassWithInstructor, sqlx::Error> {
    Ok(ClassWithInstructor {
        class: class_from_plain(row)?,
        instructor: instructor_from_prefixed(row, "instructor_id")?,
    })
}

pub(super) fn class_detail(row: &SqliteRow) -> Result<ClassDetail, sqlx::Error> {
    Ok(ClassDetail {
        class: class_from_plain(row)?,
        instructor: instructor_from_prefixed(row, "instructor_id")?,
        booking: booking_from_prefixed(row)?,
    })
}

pub(super) fn booking_detail(row: &SqliteRow) -> Result<BookingDetail, sqlx::Error> {
    let class = LessonClass {
        id: row.try_get("class_id")?,
        instructor_id: row.try_get("class_instructor_id")?,
        instrument: row.try_get("class_instrument")?,
        level: row.try_get("class_level")?,
        scheduled_at: row.try_get("class_scheduled_at")?,
        duration_minutes: row.try_get("class_duration_minutes")?,
        price_cents: row.try_get("class_price_cents")?,
        description: row.try_get("class_description")?,
        status: row.try_get("class_status")?,
    };
    let booking = Booking {
        id: row.try_get("id")?,
        class_id: row.try_get("class_id")?,
        student_name: row.try_get("student_name")?,
        student_email: row.try_get("student_email")?,
        student_phone: row.try_get("student_phone")?,
        notes: row.try_get("notes")?,
        status: row.try_get("status")?,
        booked_at: row.try_get("booked_at")?,
    };
    Ok(BookingDetail {
        booking,
        instructor: instructor_from_prefixed(row, "class_instructor_id")?,
        class,
    })
}
