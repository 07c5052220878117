//! The in-memory list of tasks

use thiserror::Error;

use crate::task::Task;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("There is no task number {index} (the list has {len} task(s)).")]
    NoSuchTask { index: usize, len: usize },
}

/// An ordered list of tasks.
///
/// Tasks are referred to by their 1-based position, the way they are shown to the user
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over the tasks, along with their 1-based number
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks.iter().enumerate().map(|(i, task)| (i + 1, task))
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.position(index).ok().map(|pos| &self.tasks[pos])
    }

    /// Append a task and return a reference to it
    pub fn add(&mut self, task: Task) -> &Task {
        let pos = self.tasks.len();
        self.tasks.push(task);
        &self.tasks[pos]
    }

    pub fn delete(&mut self, index: usize) -> Result<Task, ListError> {
        let pos = self.position(index)?;
        Ok(self.tasks.remove(pos))
    }

    pub fn mark(&mut self, index: usize) -> Result<&Task, ListError> {
        self.set_status(index, true)
    }

    pub fn unmark(&mut self, index: usize) -> Result<&Task, ListError> {
        self.set_status(index, false)
    }

    pub fn set_status(&mut self, index: usize, done: bool) -> Result<&Task, ListError> {
        let pos = self.position(index)?;
        let task = &mut self.tasks[pos];
        task.set_status(done);
        Ok(task)
    }

    /// Tasks whose name contains `keyword` (case-sensitive), along with their 1-based number
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        self.iter()
            .filter(|(_, task)| task.name().contains(keyword))
            .collect()
    }

    /// Order tasks by due date (events by their start). To-dos go last, in their current order
    pub fn sort_by_due(&mut self) {
        self.tasks.sort_by_key(|task| (task.due().is_none(), task.due()));
    }

    /// The store string of every task, in order
    pub fn to_store_strings(&self) -> Vec<String> {
        self.tasks.iter().map(|task| task.to_store_string()).collect()
    }

    fn position(&self, index: usize) -> Result<usize, ListError> {
        if index == 0 || index > self.tasks.len() {
            return Err(ListError::NoSuchTask { index, len: self.tasks.len() });
        }
        Ok(index - 1)
    }
}
