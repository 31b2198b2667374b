use serde::Serialize;

use crate::domain::models::class::LessonClass;
use crate::domain::models::instructor::Instructor;

/// An instructor with every slot they own, past ones included.
#[derive(Serialize)]
pub struct InstructorDetail {
    #[serde(flatten)]
    pub instructor: Instructor,
    pub classes: Vec<LessonClass>,
}
