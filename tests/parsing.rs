//! Parsing of command lines, as seen from outside the crate

use chrono::{NaiveDate, NaiveDateTime};

use taskline::command::Command;
use taskline::parser::{parse_deadline, parse_event, parse_find_keyword, parse_task_index, parse_todo, ParseError};
use taskline::Task;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

#[test]
fn todo_names_are_trimmed() {
    let _ = env_logger::builder().is_test(true).try_init();

    for name in ["read book", "  call mom ", "x", "buy milk /by tomorrow"].iter() {
        let todo = parse_todo(&format!("todo {}", name)).unwrap();
        assert_eq!(todo.name(), name.trim());
        assert_eq!(todo.status(), false);
        assert_eq!(todo.due(), None);
    }
    assert_eq!(parse_todo("todo"), Err(ParseError::EmptyTask));
    assert_eq!(parse_todo("todo "), Err(ParseError::EmptyTask));
}

#[test]
fn deadlines() {
    let _ = env_logger::builder().is_test(true).try_init();

    let deadline = parse_deadline("deadline return book /by 2019-10-15 1800").unwrap();
    assert_eq!(deadline.name(), "return book");
    assert_eq!(deadline.due(), Some(at(2019, 10, 15, 18, 0)));

    assert_eq!(parse_deadline("deadline return book"), Err(ParseError::MissingTime));
    assert_eq!(parse_deadline("deadline return book /by 2019-13-40 1800"), Err(ParseError::InvalidDeadline));
}

#[test]
fn events() {
    let _ = env_logger::builder().is_test(true).try_init();

    let event = parse_event("event meeting /from 2019-10-15 1400 /to 2019-10-15 1600").unwrap();
    assert_eq!(event.name(), "meeting");
    assert!(event.start() < event.end());

    assert_eq!(
        parse_event("event meeting /from 2019-10-15 1600 /to 2019-10-15 1400"),
        Err(ParseError::InvalidEvent)
    );
}

#[test]
fn indices_and_keywords() {
    assert_eq!(parse_task_index("delete 2"), Ok(2));
    assert_eq!(parse_task_index("delete"), Err(ParseError::EmptyTask));
    assert_eq!(parse_task_index("delete two"), Err(ParseError::InvalidTask));

    assert_eq!(parse_find_keyword("find book"), Ok("book".to_string()));
    assert_eq!(parse_find_keyword("find"), Err(ParseError::InvalidTask));
}

#[test]
fn parsed_tasks_survive_a_store_round_trip() {
    let lines = [
        "todo read book",
        "deadline return book /by 2019-10-15 1800",
        "event meeting /from 2019-10-15 1400 /to 2019-10-16 0930",
    ];
    for line in lines.iter() {
        let mut task = match Command::parse(line) {
            Ok(Command::Add(task)) => task,
            other => panic!("{:?} was parsed as {:?}", line, other),
        };
        for &done in [false, true].iter() {
            task.set_status(done);
            let reloaded = Task::from_store_string(&task.to_store_string()).unwrap();
            assert_eq!(reloaded.name(), task.name());
            assert_eq!(reloaded.status(), task.status());
            assert_eq!(reloaded.due(), task.due());
            assert_eq!(reloaded, task);
        }
    }
}

#[test]
fn failures_have_user_facing_messages() {
    let errors = [
        ParseError::EmptyTask,
        ParseError::MissingTime,
        ParseError::InvalidDeadline,
        ParseError::InvalidEvent,
        ParseError::InvalidTask,
    ];
    for err in errors.iter() {
        assert!(err.to_string().is_empty() == false);
    }
}

#[test]
fn dates_must_be_written_in_full() {
    let _ = env_logger::builder().is_test(true).try_init();

    for date in ["2019-1-5", "19-10-15", "+2019-10-15", "2019/10/15", "12019-10-15", "2019-010-15"].iter() {
        assert_eq!(
            parse_deadline(&format!("deadline return book /by {} 1800", date)),
            Err(ParseError::InvalidDeadline),
            "{}", date
        );
        assert_eq!(
            parse_event(&format!("event meeting /from {} 1400 /to 2019-10-15 1600", date)),
            Err(ParseError::InvalidEvent),
            "{}", date
        );
    }
    assert_eq!(
        parse_deadline("deadline return book /by 2019-01-05 1800").map(|d| d.due()),
        Ok(Some(at(2019, 1, 5, 18, 0)))
    );
}
