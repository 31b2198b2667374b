pub mod sqlite_booking_repo;
pub mod sqlite_class_repo;
pub mod sqlite_instructor_repo;

mod row_mappers;
