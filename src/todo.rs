//! Plain to-do tasks, that have no date attached

use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;

use crate::task::{join_fields, status_flag, status_marker, TaskKind};

/// A to-do task
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToDo {
    /// Whether this task has been done
    done: bool,
    /// The description of the task
    name: String,
}

impl ToDo {
    pub fn new(name: String, done: bool) -> Self {
        Self { done, name }
    }

    pub fn name(&self) -> &str                 { &self.name }
    pub fn status(&self) -> bool               { self.done  }
    /// To-dos have no due date
    pub fn due(&self) -> Option<NaiveDateTime> { None       }

    pub fn set_status(&mut self, done: bool) {
        self.done = done;
    }

    pub fn to_store_string(&self) -> String {
        self.to_update_string(status_flag(self.done))
    }

    pub fn to_update_string(&self, new_status: i32) -> String {
        join_fields(&[TaskKind::ToDo.tag(), &new_status.to_string(), &self.name])
    }
}

impl Display for ToDo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]{} {}", TaskKind::ToDo.tag(), status_marker(self.done), self.name)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_strings() {
        let mut todo = ToDo::new("borrow book".to_string(), false);
        assert_eq!(todo.to_string(), "[T][ ] borrow book");
        assert_eq!(todo.to_store_string(), "T/@/0/@/borrow book");
        assert_eq!(todo.to_update_string(1), "T/@/1/@/borrow book");

        todo.set_status(true);
        assert_eq!(todo.to_string(), "[T][X] borrow book");
        assert_eq!(todo.to_store_string(), "T/@/1/@/borrow book");
        assert_eq!(todo.to_update_string(0), "T/@/0/@/borrow book");
    }
}
