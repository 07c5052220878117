//! Some utility functions to show tasks to the user

use crate::list::TaskList;
use crate::task::Task;

pub fn print_task(index: usize, task: &Task) {
    println!("    {}. {}", index, task);
}

pub fn print_task_list(list: &TaskList) {
    if list.is_empty() {
        println!("    Your list is empty.");
        return;
    }
    println!("    Here are the tasks in your list:");
    for (index, task) in list.iter() {
        print_task(index, task);
    }
}

pub fn print_matches(keyword: &str, matches: &[(usize, &Task)]) {
    if matches.is_empty() {
        println!("    No task matches {:?}.", keyword);
        return;
    }
    println!("    Here are the matching tasks in your list:");
    for (index, task) in matches {
        print_task(*index, task);
    }
}

/// How many tasks there are, e.g. `Now you have 3 tasks in the list.`
pub fn count_message(list: &TaskList) -> String {
    match list.len() {
        1 => "Now you have 1 task in the list.".to_string(),
        n => format!("Now you have {} tasks in the list.", n),
    }
}
