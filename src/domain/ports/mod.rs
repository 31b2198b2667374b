use crate::domain::models::{
    booking::{Booking, BookingDetail, NewBooking},
    class::{ClassDetail, ClassWithInstructor, LessonClass, NewClass, SkillLevel},
    instructor::{Instructor, NewInstructor},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait InstructorRepository: Send + Sync {
    async fn create(&self, instructor: &NewInstructor) -> Result<Instructor, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Instructor>, AppError>;
    async fn list(&self) -> Result<Vec<Instructor>, AppError>;
    async fn list_active(&self) -> Result<Vec<Instructor>, AppError>;
    async fn update(&self, instructor: &Instructor) -> Result<Instructor, AppError>;
    /// Succeeds silently when the id is unknown; an instructor that still owns
    /// classes is rejected by the store's foreign key restriction.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn create(&self, class: &NewClass) -> Result<LessonClass, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ClassDetail>, AppError>;
    async fn find_slot(&self, id: i64) -> Result<Option<LessonClass>, AppError>;
    async fn list_available(&self) -> Result<Vec<ClassWithInstructor>, AppError>;
    async fn list_by_instrument(&self, instrument: &str) -> Result<Vec<ClassWithInstructor>, AppError>;
    async fn list_by_level(&self, level: SkillLevel) -> Result<Vec<ClassWithInstructor>, AppError>;
    /// Upcoming slots of one instructor regardless of status, booking attached.
    async fn list_by_instructor(&self, instructor_id: i64) -> Result<Vec<ClassDetail>, AppError>;
    /// Every slot an instructor owns, past ones included.
    async fn list_owned(&self, instructor_id: i64) -> Result<Vec<LessonClass>, AppError>;
    async fn list_instruments(&self) -> Result<Vec<String>, AppError>;
    async fn update(&self, class: &LessonClass) -> Result<LessonClass, AppError>;
    /// Succeeds silently when the id is unknown; a dependent booking is removed
    /// by the store's cascade rule.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts the confirmed booking and flips the slot to BOOKED in one
    /// transaction. Eligibility is checked by the caller beforehand.
    async fn create_confirmed(&self, booking: &NewBooking) -> Result<Booking, AppError>;
    /// Sets the booking CANCELLED and its slot back to AVAILABLE in one
    /// transaction. Unknown ids are a silent no-op.
    async fn cancel(&self, id: i64) -> Result<(), AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<BookingDetail>, AppError>;
    async fn list_all(&self) -> Result<Vec<BookingDetail>, AppError>;
    async fn list_by_instructor(&self, instructor_id: i64) -> Result<Vec<BookingDetail>, AppError>;
}
