//! Turns raw command lines into tasks, task numbers and search keywords
//!
//! Every function of this module takes the whole line typed by the user, command keyword included
//! (e.g. `deadline return book /by 2019-10-15 1800`), and either returns the value it extracted
//! or exactly one [`ParseError`], describing the first malformation that has been found.
//!
//! Dates are expected as `YYYY-MM-DD`, times of day as 24-hour `HHMM`, separated by whitespace.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::deadline::Deadline;
use crate::event::Event;
use crate::todo::ToDo;

/// Separates the name of a deadline from its due date
pub const DEADLINE_MARKER: &str = "/by";
/// Separates the name of an event from its start time
pub const START_MARKER: &str = "/from";
/// Separates the start time of an event from its end time
pub const END_MARKER: &str = "/to";

/// A timestamp is made of exactly this many whitespace-separated tokens...
const TIMESTAMP_TOKENS: usize = 2;
/// ...the date comes first...
const DATE_TOKEN: usize = 0;
/// ...followed by the time of day
const TIME_TOKEN: usize = 1;
/// `HHMM`
const TIME_TOKEN_LEN: usize = 4;
const DATE_FORMAT: &str = "%Y-%m-%d";
/// `YYYY-MM-DD`: positions of the two dashes, every other byte is a digit
const DATE_TOKEN_LEN: usize = 10;
const DATE_DASHES: [usize; 2] = [4, 7];


/// Everything that can be wrong in a command line.
///
/// The messages are meant to be shown to the user as-is.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("The description of a task cannot be empty.")]
    EmptyTask,
    #[error("This task needs a time. Use /by for deadlines, and /from ... /to ... for events.")]
    MissingTime,
    #[error("Deadlines must look like: deadline <description> /by <yyyy-mm-dd> <hhmm>")]
    InvalidDeadline,
    #[error("Events must look like: event <description> /from <yyyy-mm-dd> <hhmm> /to <yyyy-mm-dd> <hhmm>, and cannot end before they start.")]
    InvalidEvent,
    #[error("Sorry, I don't know what that means.")]
    InvalidTask,
}

/// Low-level reasons for a timestamp to be rejected.
///
/// These never leave the crate: callers turn them into the [`ParseError`] that makes sense for the command
#[derive(Clone, Debug, Error, PartialEq)]
pub(crate) enum TimestampError {
    #[error("expected a date and a time, got {0} token(s)")]
    TokenCount(usize),
    #[error("date {0:?} is not written as YYYY-MM-DD")]
    DateFormat(String),
    #[error("time of day {0:?} is not made of 4 digits")]
    TimeFormat(String),
    #[error("{hour:02}:{minute:02} is not a valid time of day")]
    TimeOutOfRange { hour: u32, minute: u32 },
    #[error("invalid date {date:?}: {source}")]
    Date {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
}


/// Parse `todo <description>`
pub fn parse_todo(input: &str) -> Result<ToDo, ParseError> {
    let name = task_name(input).ok_or(ParseError::EmptyTask)?;
    Ok(ToDo::new(name.to_string(), false))
}

/// Parse `deadline <description> /by <yyyy-mm-dd> <hhmm>`
pub fn parse_deadline(input: &str) -> Result<Deadline, ParseError> {
    let (name_segment, time_segment) = input
        .split_once(DEADLINE_MARKER)
        .ok_or(ParseError::MissingTime)?;
    if time_segment.trim().is_empty() {
        return Err(ParseError::MissingTime);
    }

    let name = task_name(name_segment).ok_or(ParseError::EmptyTask)?;

    let due = parse_timestamp(time_segment).map_err(|err| {
        log::debug!("Invalid deadline {:?}: {}", time_segment, err);
        ParseError::InvalidDeadline
    })?;

    Ok(Deadline::new(name.to_string(), false, due))
}

/// Parse `event <description> /from <yyyy-mm-dd> <hhmm> /to <yyyy-mm-dd> <hhmm>`
pub fn parse_event(input: &str) -> Result<Event, ParseError> {
    let (name_segment, rest) = input
        .split_once(START_MARKER)
        .ok_or(ParseError::MissingTime)?;
    if rest.trim().is_empty() {
        return Err(ParseError::MissingTime);
    }

    let name = task_name(name_segment).ok_or(ParseError::EmptyTask)?;

    let (start_segment, end_segment) = rest
        .split_once(END_MARKER)
        .ok_or(ParseError::MissingTime)?;
    if start_segment.trim().is_empty() || end_segment.trim().is_empty() {
        return Err(ParseError::MissingTime);
    }

    let to_event_error = |segment: &str, err: TimestampError| {
        log::debug!("Invalid event time {:?}: {}", segment, err);
        ParseError::InvalidEvent
    };
    let start = parse_timestamp(start_segment).map_err(|err| to_event_error(start_segment, err))?;
    let end = parse_timestamp(end_segment).map_err(|err| to_event_error(end_segment, err))?;

    if start > end {
        log::debug!("Event {:?} would end ({}) before it starts ({})", name, end, start);
        return Err(ParseError::InvalidEvent);
    }

    Ok(Event::new(name.to_string(), false, start, end))
}

/// Parse `<command> <task number>`, e.g. `delete 2`.
///
/// This does not check whether such a task exists. Anything that is not a non-negative integer is an [`ParseError::InvalidTask`]
pub fn parse_task_index(input: &str) -> Result<usize, ParseError> {
    let token = argument(input).ok_or(ParseError::EmptyTask)?;
    token.parse::<usize>().map_err(|err| {
        log::debug!("Invalid task number {:?}: {}", token, err);
        ParseError::InvalidTask
    })
}

/// Parse `find <keyword>`.
///
/// Only the first word after the command is used as a keyword, the rest of the line is ignored.
pub fn parse_find_keyword(input: &str) -> Result<String, ParseError> {
    argument(input)
        .map(|keyword| keyword.to_string())
        .ok_or(ParseError::InvalidTask)
}


/// Parse a `<yyyy-mm-dd> <hhmm>` timestamp, surrounding whitespace allowed
pub(crate) fn parse_timestamp(segment: &str) -> Result<NaiveDateTime, TimestampError> {
    let tokens: Vec<&str> = segment.split_whitespace().collect();
    if tokens.len() != TIMESTAMP_TOKENS {
        return Err(TimestampError::TokenCount(tokens.len()));
    }

    let date = parse_date(tokens[DATE_TOKEN])?;
    let time = parse_time_of_day(tokens[TIME_TOKEN])?;

    Ok(date.and_time(time))
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// chrono alone accepts short or signed fields (e.g. `2019-1-5`, `+2019-10-15`), so the shape is checked first
fn parse_date(token: &str) -> Result<NaiveDate, TimestampError> {
    let well_formed = token.len() == DATE_TOKEN_LEN
        && token.bytes().enumerate().all(|(i, b)| {
            if DATE_DASHES.contains(&i) { b == b'-' } else { b.is_ascii_digit() }
        });
    if well_formed == false {
        return Err(TimestampError::DateFormat(token.to_string()));
    }

    NaiveDate::parse_from_str(token, DATE_FORMAT)
        .map_err(|source| TimestampError::Date { date: token.to_string(), source })
}

/// Parse `HHMM` as two fixed-width numbers
fn parse_time_of_day(token: &str) -> Result<NaiveTime, TimestampError> {
    let format_error = || TimestampError::TimeFormat(token.to_string());
    if token.len() != TIME_TOKEN_LEN || token.bytes().any(|b| b.is_ascii_digit() == false) {
        return Err(format_error());
    }

    let (hours, minutes) = token.split_at(TIME_TOKEN_LEN / 2);
    let hour: u32 = hours.parse().map_err(|_| format_error())?;
    let minute: u32 = minutes.parse().map_err(|_| format_error())?;

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or(TimestampError::TimeOutOfRange { hour, minute })
}

/// Everything after the command keyword, trimmed. `None` if there is nothing left
fn task_name(segment: &str) -> Option<&str> {
    segment
        .trim_start()
        .split_once(char::is_whitespace)
        .map(|(_keyword, rest)| rest.trim())
        .filter(|rest| rest.is_empty() == false)
}

/// The word right after the command keyword
fn argument(input: &str) -> Option<&str> {
    input.split_whitespace().nth(1)
}
