//! Tasks that must be done before a given date

use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;

use crate::task::{join_fields, status_flag, status_marker, TaskKind, DISPLAY_FORMAT, STORE_FORMAT};

/// A task with a due date
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deadline {
    done: bool,
    name: String,
    due: NaiveDateTime,
}

impl Deadline {
    pub fn new(name: String, done: bool, due: NaiveDateTime) -> Self {
        Self { done, name, due }
    }

    pub fn name(&self) -> &str                 { &self.name     }
    pub fn status(&self) -> bool               { self.done      }
    pub fn due(&self) -> Option<NaiveDateTime> { Some(self.due) }

    pub fn set_status(&mut self, done: bool) {
        self.done = done;
    }

    pub fn to_store_string(&self) -> String {
        self.to_update_string(status_flag(self.done))
    }

    pub fn to_update_string(&self, new_status: i32) -> String {
        let due = self.due.format(STORE_FORMAT).to_string();
        join_fields(&[TaskKind::Deadline.tag(), &new_status.to_string(), &self.name, &due])
    }
}

impl Display for Deadline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]{} {} (by: {})",
            TaskKind::Deadline.tag(),
            status_marker(self.done),
            self.name,
            self.due.format(DISPLAY_FORMAT))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_deadline_strings() {
        let due = NaiveDate::from_ymd_opt(2019, 10, 15).unwrap().and_hms_opt(18, 0, 0).unwrap();
        let deadline = Deadline::new("return book".to_string(), false, due);

        assert_eq!(deadline.to_string(), "[D][ ] return book (by: Oct 15 2019 18:00)");
        assert_eq!(deadline.to_store_string(), "D/@/0/@/return book/@/2019-10-15 1800");
        assert_eq!(deadline.to_update_string(1), "D/@/1/@/return book/@/2019-10-15 1800");
        assert_eq!(deadline.due(), Some(due));
    }
}
