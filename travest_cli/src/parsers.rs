use jiff::civil::{Date, Time};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputFormatError {
    #[error("Invalid arrival date '{0}', expected MM/DD/YYYY or YYYY-MM-DD")]
    Date(String),

    #[error("Invalid arrival time '{0}', expected H:MM")]
    Time(String),
}

fn parse_us_date(input: &str) -> Option<Date> {
    let mut parts = input.split('/');
    let month = parts.next()?.parse::<i8>().ok()?;
    let day = parts.next()?.parse::<i8>().ok()?;
    let year = parts.next()?.parse::<i16>().ok()?;

    if parts.next().is_some() {
        return None;
    }

    Date::new(year, month, day).ok()
}

fn parse_hour_minute(input: &str) -> Option<Time> {
    let (hour, minute) = input.split_once(':')?;
    let hour = hour.parse::<i8>().ok()?;
    let minute = minute.parse::<i8>().ok()?;

    Time::new(hour, minute, 0, 0).ok()
}

pub fn parse_arrival_date(input: &str) -> Result<Date, InputFormatError> {
    let input = input.trim();

    if let Some(date) = parse_us_date(input) {
        return Ok(date);
    }

    if let Ok(date) = input.parse::<Date>() {
        return Ok(date);
    }

    Err(InputFormatError::Date(input.to_string()))
}

pub fn parse_arrival_time(input: &str) -> Result<Time, InputFormatError> {
    let input = input.trim();

    if let Some(time) = parse_hour_minute(input) {
        return Ok(time);
    }

    if let Ok(time) = input.parse::<Time>() {
        return Ok(time);
    }

    Err(InputFormatError::Time(input.to_string()))
}
