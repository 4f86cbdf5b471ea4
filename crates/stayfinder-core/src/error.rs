use chrono::NaiveDate;
use thiserror::Error;

/// Failures while loading or validating a room catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    FileParse(#[from] serde_yaml::Error),

    #[error("invalid catalog: {0}")]
    Validation(String),
}

/// Failures while loading application configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Rejected booking requests.
///
/// Booking is the only fallible operation in the core; the search and pricing
/// functions are total and degrade to defensive defaults instead of failing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("no room with id '{0}' in the catalog")]
    UnknownRoom(String),

    #[error("both check-in and check-out dates are required")]
    MissingDates,

    #[error("check-out {check_out} must be after check-in {check_in}")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("at least one guest is required")]
    NoGuests,

    #[error("room sleeps at most {capacity} guests, got {requested}")]
    OverCapacity { requested: u32, capacity: u32 },
}
