use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{BookingRepository, ClassRepository, InstructorRepository};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub instructor_repo: Arc<dyn InstructorRepository>,
    pub class_repo: Arc<dyn ClassRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
}
