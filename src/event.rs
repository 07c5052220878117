//! Tasks that span a time range

use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;

use crate::task::{join_fields, status_flag, status_marker, TaskKind, DISPLAY_FORMAT, STORE_FORMAT};

/// A task that starts and ends at given times.
///
/// The parser and the store decoder both guarantee that `start <= end`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    done: bool,
    name: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Event {
    pub fn new(name: String, done: bool, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { done, name, start, end }
    }

    pub fn name(&self) -> &str             { &self.name  }
    pub fn status(&self) -> bool           { self.done   }
    pub fn start(&self) -> NaiveDateTime   { self.start  }
    pub fn end(&self) -> NaiveDateTime     { self.end    }

    /// Events are sorted and displayed by their start time
    pub fn due(&self) -> Option<NaiveDateTime> {
        Some(self.start)
    }

    pub fn set_status(&mut self, done: bool) {
        self.done = done;
    }

    pub fn to_store_string(&self) -> String {
        self.to_update_string(status_flag(self.done))
    }

    pub fn to_update_string(&self, new_status: i32) -> String {
        let start = self.start.format(STORE_FORMAT).to_string();
        let end = self.end.format(STORE_FORMAT).to_string();
        join_fields(&[TaskKind::Event.tag(), &new_status.to_string(), &self.name, &start, &end])
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]{} {} (from: {} to: {})",
            TaskKind::Event.tag(),
            status_marker(self.done),
            self.name,
            self.start.format(DISPLAY_FORMAT),
            self.end.format(DISPLAY_FORMAT))
    }
}
