//! Presentation-context selector for the UI layer.
//!
//! The backend itself never reads this; it exists for embedding consumers that
//! need to gate an admin / instructor / public surface. It is an explicit
//! container handed to whoever owns the UI root, not process-global state.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewMode {
    Public,
    Admin,
    Instructor,
}

type Observer = Box<dyn Fn() + Send>;

struct ModeState {
    mode: ViewMode,
    instructor_id: Option<i64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

pub struct ViewModeHolder {
    state: Mutex<ModeState>,
    observers: Mutex<Vec<(SubscriptionId, Observer)>>,
    next_id: Mutex<u64>,
}

impl Default for ViewModeHolder {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewModeHolder {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ModeState { mode: ViewMode::Public, instructor_id: None }),
            observers: Mutex::new(Vec::new()),
            next_id: Mutex::new(0),
        }
    }

    pub fn current_mode(&self) -> ViewMode {
        self.state.lock().unwrap().mode
    }

    pub fn current_instructor(&self) -> Option<i64> {
        self.state.lock().unwrap().instructor_id
    }

    /// Meaningful only in Instructor mode; cleared automatically on leaving it.
    pub fn set_instructor(&self, instructor_id: Option<i64>) {
        self.state.lock().unwrap().instructor_id = instructor_id;
    }

    /// Switches the mode and notifies observers in registration order.
    ///
    /// Selecting the mode that is already current is a no-op and fires no
    /// notification. Leaving Instructor mode clears the selected instructor as
    /// part of the same transition, so observers always see the final state.
    pub fn set_mode(&self, mode: ViewMode) {
        {
            let mut state = self.state.lock().unwrap();
            if state.mode == mode {
                return;
            }
            state.mode = mode;
            if mode != ViewMode::Instructor {
                state.instructor_id = None;
            }
        }
        for (_, observer) in self.observers.lock().unwrap().iter() {
            observer();
        }
    }

    pub fn subscribe(&self, observer: impl Fn() + Send + 'static) -> SubscriptionId {
        let mut next = self.next_id.lock().unwrap();
        let id = SubscriptionId(*next);
        *next += 1;
        self.observers.lock().unwrap().push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.observers.lock().unwrap().retain(|(sub, _)| *sub != id);
    }
}
