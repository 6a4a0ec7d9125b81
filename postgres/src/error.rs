use snafu::{GenerateImplicitData, Location, Snafu};
use tracks_core::Error as CoreError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to connect to the database"))]
    Connection {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: sqlx::Error,
    },
    #[snafu(display("A query related error occured"))]
    Query {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: sqlx::Error,
    },
    #[snafu(display("Failed to run migrations"))]
    Migrate {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: sqlx::migrate::MigrateError,
    },
}

impl Error {
    fn is_timeout(&self) -> bool {
        match self {
            Error::Connection { error, .. } | Error::Query { error, .. } => {
                matches!(error, sqlx::Error::PoolTimedOut)
            }
            Error::Migrate { .. } => false,
        }
    }
}

impl From<Error> for CoreError {
    #[track_caller]
    fn from(value: Error) -> Self {
        let location = Location::generate();
        if value.is_timeout() {
            CoreError::Timeout {
                location,
                source: Box::new(value),
            }
        } else {
            CoreError::Query {
                location,
                source: Box::new(value),
            }
        }
    }
}
