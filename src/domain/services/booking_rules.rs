use chrono::{DateTime, Utc};

use crate::domain::models::class::{ClassStatus, LessonClass};

/// Eligibility check performed before a booking is accepted.
///
/// A slot can be booked while it is AVAILABLE and its start lies strictly in
/// the future. Callers treat a slot that does not exist at all as not bookable;
/// this predicate only judges a slot that was found. Read-only, so it is also
/// usable on its own (e.g. to grey out a "book" button).
pub fn is_bookable(class: &LessonClass, now: DateTime<Utc>) -> bool {
    class.status == ClassStatus::Available && class.scheduled_at > now
}
