//! Classification of whole command lines

use crate::parser::{self, ParseError};
use crate::task::Task;

/// A command typed by the user, once parsed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show every task
    List,
    /// Order tasks by due date
    Sort,
    /// Leave the application
    Bye,
    /// Create a task (`todo`, `deadline` or `event`)
    Add(Task),
    /// Mark the task with the given (1-based) number as done
    Mark(usize),
    /// Mark the task with the given (1-based) number as not done
    Unmark(usize),
    /// Remove the task with the given (1-based) number
    Delete(usize),
    /// Show the tasks whose name contains a keyword
    Find(String),
}

impl Command {
    /// Identify the keyword at the start of `input` and parse the line accordingly
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let keyword = input.split_whitespace().next().unwrap_or_default();
        let command = match keyword {
            "list" => Command::List,
            "sort" => Command::Sort,
            "bye" => Command::Bye,
            "todo" => Command::Add(parser::parse_todo(input)?.into()),
            "deadline" => Command::Add(parser::parse_deadline(input)?.into()),
            "event" => Command::Add(parser::parse_event(input)?.into()),
            "mark" => Command::Mark(parser::parse_task_index(input)?),
            "unmark" => Command::Unmark(parser::parse_task_index(input)?),
            "delete" => Command::Delete(parser::parse_task_index(input)?),
            "find" => Command::Find(parser::parse_find_keyword(input)?),
            other => {
                log::debug!("Unknown command {:?}", other);
                return Err(ParseError::InvalidTask);
            },
        };
        Ok(command)
    }

    /// Whether running this command changes the task list (and thus has to be persisted)
    pub fn modifies_list(&self) -> bool {
        match self {
            Command::List | Command::Bye | Command::Find(_) => false,
            _ => true,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing() {
        assert_eq!(Command::parse("list"), Ok(Command::List));
        assert_eq!(Command::parse("  bye  "), Ok(Command::Bye));
        assert_eq!(Command::parse("sort"), Ok(Command::Sort));
        assert_eq!(Command::parse("mark 3"), Ok(Command::Mark(3)));
        assert_eq!(Command::parse("unmark 1"), Ok(Command::Unmark(1)));
        assert_eq!(Command::parse("delete 2"), Ok(Command::Delete(2)));
        assert_eq!(Command::parse("find book"), Ok(Command::Find("book".to_string())));

        match Command::parse("deadline return book /by 2019-10-15 1800") {
            Ok(Command::Add(task)) => assert!(task.is_deadline()),
            other => panic!("unexpected {:?}", other),
        }
        match Command::parse("event meeting /from 2019-10-15 1400 /to 2019-10-15 1600") {
            Ok(Command::Add(task)) => assert!(task.is_event()),
            other => panic!("unexpected {:?}", other),
        }
        match Command::parse("todo read book") {
            Ok(Command::Add(task)) => assert_eq!(task.name(), "read book"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_routing_failures() {
        assert_eq!(Command::parse(""), Err(ParseError::InvalidTask));
        assert_eq!(Command::parse("blah blah"), Err(ParseError::InvalidTask));
        assert_eq!(Command::parse("TODO read book"), Err(ParseError::InvalidTask));
        assert_eq!(Command::parse("todo"), Err(ParseError::EmptyTask));
        assert_eq!(Command::parse("delete"), Err(ParseError::EmptyTask));
        assert_eq!(Command::parse("find"), Err(ParseError::InvalidTask));
        assert_eq!(Command::parse("deadline x /by 2019-13-40 1800"), Err(ParseError::InvalidDeadline));
    }

    #[test]
    fn test_modifies_list() {
        assert!(Command::Delete(1).modifies_list());
        assert!(Command::Sort.modifies_list());
        assert!(Command::List.modifies_list() == false);
        assert!(Command::Find("x".to_string()).modifies_list() == false);
    }
}
