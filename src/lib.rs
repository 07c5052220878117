//! This crate provides a personal task tracker driven by free-text command lines.
//!
//! Lines such as `deadline return book /by 2019-10-15 1800` are turned into typed tasks by the [`parser`] module,
//! that reports a specific [`ParseError`](parser::ParseError) for each way a line can be malformed. \
//! Whole lines are classified by [`Command::parse`](command::Command::parse).
//!
//! Tasks are kept in a [`TaskList`](list::TaskList), and persisted one per line by the [`storage`] module.

pub mod parser;
pub mod command;

mod task;
pub use task::{Task, TaskKind, StoreError, STORE_DELIMITER, status_flag};
mod todo;
pub use todo::ToDo;
mod deadline;
pub use deadline::Deadline;
mod event;
pub use event::Event;

pub mod list;
pub mod storage;

pub mod config;
pub mod utils;
