use chrono::{NaiveDate, NaiveTime, ParseResult, Timelike};

/// Canonical format of an action day, as stored in the database.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Canonical format of a time of day, as stored in the database.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Shorter format accepted from user input. Seconds are assumed to be 0.
const SHORT_TIME_FORMAT: &str = "%H:%M";

/// This is the standard way of converting a date to a string in crushit.
pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Formats time of day using [TIME_FORMAT]. Fractions of a second are dropped.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub fn parse_day(value: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DAY_FORMAT)
}

/// Strict parsing of a stored time. Only [TIME_FORMAT] is accepted.
pub fn parse_stored_time(value: &str) -> ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
}

/// Lenient parsing of user input. Accepts both `HH:MM:SS` and `HH:MM`.
pub fn parse_input_time(value: &str) -> ParseResult<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, SHORT_TIME_FORMAT))
}

/// Drops everything below a second, so that comparisons match what is later stored.
pub fn truncate_to_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}
