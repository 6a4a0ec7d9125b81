use crate::{
    ParseError, TimeWindowError, parse_error::TimestampSnafu, time_window_error::OrderingSnafu,
};
use chrono::NaiveDateTime;
use snafu::ResultExt;

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// The period an overlay covers, both ends are inclusive and `stop` is always after `start`.
///
/// Timestamps carry no zone, they are compared as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    stop: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, stop: NaiveDateTime) -> Result<TimeWindow, TimeWindowError> {
        if stop <= start {
            OrderingSnafu { start, stop }.fail()
        } else {
            Ok(TimeWindow { start, stop })
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn stop(&self) -> NaiveDateTime {
        self.stop
    }

    pub fn contains(&self, val: NaiveDateTime) -> bool {
        val >= self.start && val <= self.stop
    }
}

/// Parses the date-time forms accepted from clients, `2024-05-01 13:00:00` being the canonical one.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ParseError> {
    let trimmed = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .skip(1)
        .fold(
            NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMATS[0]),
            |parsed, format| parsed.or_else(|_| NaiveDateTime::parse_from_str(trimmed, format)),
        )
        .context(TimestampSnafu { value })
}
