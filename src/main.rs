use std::error::Error;
use std::io::{stdin, BufRead};

use taskline::command::Command;
use taskline::config::Settings;
use taskline::list::TaskList;
use taskline::storage::Storage;
use taskline::utils;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let settings = Settings::resolve()?;
    let storage = Storage::from_settings(&settings);
    let mut list = match storage.load() {
        Ok(list) => list,
        Err(err) => {
            log::warn!("Invalid task file: {}. Starting with an empty list", err);
            TaskList::new()
        }
    };

    println!("    Hello! What can I do for you?");
    for line in stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Err(err) => println!("    {}", err),
            Ok(Command::Bye) => break,
            Ok(command) => execute(command, &mut list, &storage),
        }
    }
    println!("    Bye. Hope to see you again soon!");
    Ok(())
}

fn execute(command: Command, list: &mut TaskList, storage: &Storage) {
    let modifies_list = command.modifies_list();
    let result = match &command {
        Command::List => {
            utils::print_task_list(list);
            Ok(())
        },
        // Handled by the input loop
        Command::Bye => Ok(()),
        Command::Sort => {
            list.sort_by_due();
            utils::print_task_list(list);
            Ok(())
        },
        Command::Find(keyword) => {
            utils::print_matches(keyword, &list.find(keyword));
            Ok(())
        },
        Command::Add(task) => {
            println!("    Got it. I've added this task:\n      {}", list.add(task.clone()));
            println!("    {}", utils::count_message(list));
            Ok(())
        },
        Command::Delete(index) => match list.delete(*index) {
            Ok(task) => {
                println!("    Noted. I've removed this task:\n      {}", task);
                println!("    {}", utils::count_message(list));
                Ok(())
            },
            Err(err) => Err(err),
        },
        Command::Mark(index) => list.mark(*index).map(|task| {
            println!("    Nice! I've marked this task as done:\n      {}", task);
        }),
        Command::Unmark(index) => list.unmark(*index).map(|task| {
            println!("    OK, I've marked this task as not done yet:\n      {}", task);
        }),
    };

    if let Err(err) = result {
        println!("    {}", err);
        return;
    }
    if modifies_list {
        persist(&command, list, storage);
    }
}

fn persist(command: &Command, list: &TaskList, storage: &Storage) {
    let result = match command {
        Command::Mark(index) | Command::Unmark(index) => {
            let done = matches!(command, Command::Mark(_));
            match list.get(*index) {
                Some(task) => storage.update_status(*index, task, done).or_else(|err| {
                    log::debug!("Unable to update a single line ({}), saving the whole list", err);
                    storage.save(list)
                }),
                None => storage.save(list),
            }
        },
        _ => storage.save(list),
    };
    if let Err(err) = result {
        log::warn!("Unable to save tasks to {:?}: {}", storage.path(), err);
    }
}
