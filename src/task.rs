//! Tasks tracked by this crate (to-dos, deadlines and events)

use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::deadline::Deadline;
use crate::event::Event;
use crate::todo::ToDo;
use crate::parser::parse_timestamp;

/// Separator between the fields of a store string
pub const STORE_DELIMITER: &str = "/@/";

/// How dates are rendered to the user, e.g. `Oct 15 2019 18:00`
pub(crate) const DISPLAY_FORMAT: &str = "%b %d %Y %H:%M";
/// How dates are written in store strings. This is the very grammar the parser accepts, e.g. `2019-10-15 1800`
pub(crate) const STORE_FORMAT: &str = "%Y-%m-%d %H%M";


/// The kind of a task, as written in the first field of a store string
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKind {
    ToDo,
    Deadline,
    Event,
}

impl TaskKind {
    pub fn tag(&self) -> &'static str {
        match self {
            TaskKind::ToDo => "T",
            TaskKind::Deadline => "D",
            TaskKind::Event => "E",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "T" => Some(TaskKind::ToDo),
            "D" => Some(TaskKind::Deadline),
            "E" => Some(TaskKind::Event),
            _ => None,
        }
    }
}

impl Display for TaskKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskKind::ToDo => write!(f, "to-do"),
            TaskKind::Deadline => write!(f, "deadline"),
            TaskKind::Event => write!(f, "event"),
        }
    }
}


/// Why a store string could not be turned back into a [`Task`]
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown task tag {0:?}")]
    UnknownTag(String),
    #[error("a {kind} line needs {expected} fields")]
    MissingFields { kind: TaskKind, expected: usize },
    #[error("invalid status flag {0:?} (expected 0 or 1)")]
    InvalidStatus(String),
    #[error("empty task name")]
    EmptyName,
    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),
    #[error("event ends before it starts")]
    EventEndsBeforeStart,
}


/// A task, whatever its kind
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Task {
    ToDo(ToDo),
    Deadline(Deadline),
    Event(Event),
}

/// Returns `todo.$property_name`, `deadline.$property_name` or `event.$property_name`, depending on the variant of self
macro_rules! synthetise_common_getter {
    ($property_name:ident, $return_type:ty) => {
        pub fn $property_name(&self) -> $return_type {
            match self {
                Task::ToDo(t) => t.$property_name(),
                Task::Deadline(d) => d.$property_name(),
                Task::Event(e) => e.$property_name(),
            }
        }
    }
}

impl Task {
    synthetise_common_getter!(status, bool);
    synthetise_common_getter!(name, &str);
    synthetise_common_getter!(due, Option<NaiveDateTime>);
    synthetise_common_getter!(to_store_string, String);

    /// Same as [`Self::to_store_string`], but with `new_status` written in the status field
    pub fn to_update_string(&self, new_status: i32) -> String {
        match self {
            Task::ToDo(t) => t.to_update_string(new_status),
            Task::Deadline(d) => d.to_update_string(new_status),
            Task::Event(e) => e.to_update_string(new_status),
        }
    }

    pub fn set_status(&mut self, done: bool) {
        match self {
            Task::ToDo(t) => t.set_status(done),
            Task::Deadline(d) => d.set_status(done),
            Task::Event(e) => e.set_status(done),
        }
    }

    pub fn kind(&self) -> TaskKind {
        match self {
            Task::ToDo(_) => TaskKind::ToDo,
            Task::Deadline(_) => TaskKind::Deadline,
            Task::Event(_) => TaskKind::Event,
        }
    }

    pub fn is_todo(&self) -> bool {
        self.kind() == TaskKind::ToDo
    }

    pub fn is_deadline(&self) -> bool {
        self.kind() == TaskKind::Deadline
    }

    pub fn is_event(&self) -> bool {
        self.kind() == TaskKind::Event
    }

    /// Rebuild a task from a line produced by [`Self::to_store_string`] (or [`Self::to_update_string`])
    ///
    /// The name is allowed to contain the delimiter itself: temporal fields are taken from the end of the line.
    pub fn from_store_string(line: &str) -> Result<Self, StoreError> {
        let mut head = line.splitn(3, STORE_DELIMITER);
        let tag = head.next().unwrap_or_default();
        let kind = TaskKind::from_tag(tag).ok_or_else(|| StoreError::UnknownTag(tag.to_string()))?;
        let (status, rest) = match (head.next(), head.next()) {
            (Some(status), Some(rest)) => (status, rest),
            _ => return Err(StoreError::MissingFields { kind, expected: field_count(kind) }),
        };
        let done = match status {
            "0" => false,
            "1" => true,
            other => return Err(StoreError::InvalidStatus(other.to_string())),
        };

        // Temporal fields come last, in reverse order
        let n_temporal = field_count(kind) - 3;
        let mut tail: Vec<&str> = rest.rsplitn(n_temporal + 1, STORE_DELIMITER).collect();
        if tail.len() != n_temporal + 1 {
            return Err(StoreError::MissingFields { kind, expected: field_count(kind) });
        }
        let name = tail.pop().unwrap_or_default();
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        let name = name.to_string();
        let mut timestamps = Vec::with_capacity(n_temporal);
        for field in tail.into_iter().rev() {
            let timestamp = parse_timestamp(field)
                .map_err(|_| StoreError::InvalidTimestamp(field.to_string()))?;
            timestamps.push(timestamp);
        }

        let task = match (kind, timestamps.as_slice()) {
            (TaskKind::ToDo, []) => Task::ToDo(ToDo::new(name, done)),
            (TaskKind::Deadline, [due]) => Task::Deadline(Deadline::new(name, done, *due)),
            (TaskKind::Event, [start, end]) => {
                if start > end {
                    return Err(StoreError::EventEndsBeforeStart);
                }
                Task::Event(Event::new(name, done, *start, *end))
            },
            _ => return Err(StoreError::MissingFields { kind, expected: field_count(kind) }),
        };
        Ok(task)
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Task::ToDo(t) => t.fmt(f),
            Task::Deadline(d) => d.fmt(f),
            Task::Event(e) => e.fmt(f),
        }
    }
}

impl From<ToDo> for Task {
    fn from(todo: ToDo) -> Self {
        Task::ToDo(todo)
    }
}

impl From<Deadline> for Task {
    fn from(deadline: Deadline) -> Self {
        Task::Deadline(deadline)
    }
}

impl From<Event> for Task {
    fn from(event: Event) -> Self {
        Task::Event(event)
    }
}


/// Number of fields of a store string for a given kind of task
fn field_count(kind: TaskKind) -> usize {
    match kind {
        TaskKind::ToDo => 3,
        TaskKind::Deadline => 4,
        TaskKind::Event => 5,
    }
}

/// The status flag, as written in store strings
pub fn status_flag(done: bool) -> i32 {
    if done { 1 } else { 0 }
}

pub(crate) fn status_marker(done: bool) -> &'static str {
    if done { "[X]" } else { "[ ]" }
}

pub(crate) fn join_fields(fields: &[&str]) -> String {
    fields.join(STORE_DELIMITER)
}
