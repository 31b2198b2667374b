pub mod booking;
pub mod class;
pub mod instructor;
