use std::{io, path::PathBuf};

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use snafu::{Location, Snafu};
use strum::EnumDiscriminants;
use tracing::{Level, event};
use tracks_core::{CompileError, ParseError, TimeWindowError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu, EnumDiscriminants)]
#[snafu(module, visibility(pub))]
#[strum_discriminants(derive(Serialize, Deserialize))]
pub enum Error {
    #[snafu(display("Invalid parameter: {source}"))]
    InvalidParameter {
        #[snafu(implicit)]
        location: Location,
        source: ParseError,
    },
    #[snafu(display("Invalid time window: {source}"))]
    InvalidWindow {
        #[snafu(implicit)]
        location: Location,
        source: TimeWindowError,
    },
    #[snafu(display("No fixes matched the request"))]
    NoData {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Overlay '{filename}' does not exist"))]
    OverlayNotFound {
        #[snafu(implicit)]
        location: Location,
        filename: String,
    },
    #[snafu(display("The record source is unavailable"))]
    SourceUnavailable {
        #[snafu(implicit)]
        location: Location,
        source: tracks_core::Error,
    },
    #[snafu(display("Failed to write the overlay"))]
    SinkUnavailable {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: io::Error,
    },
    #[snafu(display("An unexpected error occured"))]
    Unexpected {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: io::Error,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDiscriminants,
    pub description: String,
}

/// Errors that prevent the server from starting.
#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum StartupError {
    #[snafu(display("Failed to read settings"))]
    Config {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: config::ConfigError,
    },
    #[snafu(display("Failed to set up the database"))]
    Database {
        #[snafu(implicit)]
        location: Location,
        source: postgres::Error,
    },
    #[snafu(display("Failed to create overlay directory '{}'", path.display()))]
    OutputDir {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
        #[snafu(source)]
        error: io::Error,
    },
    #[snafu(display("Http server error"))]
    Server {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: io::Error,
    },
}

impl From<CompileError> for Error {
    fn from(value: CompileError) -> Self {
        match value {
            CompileError::InvalidWindow { location, source } => {
                Error::InvalidWindow { location, source }
            }
            CompileError::SourceUnavailable { location, source } => {
                Error::SourceUnavailable { location, source }
            }
            CompileError::SinkUnavailable { location, error } => {
                Error::SinkUnavailable { location, error }
            }
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidParameter { .. } | Error::InvalidWindow { .. } => {
                StatusCode::BAD_REQUEST
            }
            Error::NoData { .. } | Error::OverlayNotFound { .. } => StatusCode::NOT_FOUND,
            Error::SourceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Error::SinkUnavailable { .. } | Error::Unexpected { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            event!(Level::ERROR, "{self:?}");
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.into(),
            description: self.to_string(),
        })
    }
}
