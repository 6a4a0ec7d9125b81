use chrono::NaiveDateTime;
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by the outbound ports, every adapter converts its own errors into this.
#[derive(Debug, Snafu)]
#[snafu(module(port_error), visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to query the record source"))]
    Query {
        #[snafu(implicit)]
        location: Location,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[snafu(display("The record source timed out"))]
    Timeout {
        #[snafu(implicit)]
        location: Location,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum TimeWindowError {
    #[snafu(display("Stop '{stop}' is not after start '{start}'"))]
    Ordering {
        #[snafu(implicit)]
        location: Location,
        start: NaiveDateTime,
        stop: NaiveDateTime,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum ParseError {
    #[snafu(display("Missing value for parameter '{parameter}'"))]
    Empty {
        #[snafu(implicit)]
        location: Location,
        parameter: &'static str,
    },
    #[snafu(display("Invalid timestamp '{value}'"))]
    Timestamp {
        #[snafu(implicit)]
        location: Location,
        value: String,
        #[snafu(source)]
        error: chrono::ParseError,
    },
}

/// The failing outcomes of a compile call, `NoData` is not among them as it is a regular
/// (empty) result, see [crate::CompileOutcome].
#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum CompileError {
    #[snafu(display("Invalid time window"))]
    InvalidWindow {
        #[snafu(implicit)]
        location: Location,
        source: TimeWindowError,
    },
    #[snafu(display("The record source is unavailable"))]
    SourceUnavailable {
        #[snafu(implicit)]
        location: Location,
        source: Error,
    },
    #[snafu(display("The output sink could not be opened or written"))]
    SinkUnavailable {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: std::io::Error,
    },
}
