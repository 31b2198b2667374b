pub mod booking;
pub mod class;
pub mod health;
pub mod instructor;
