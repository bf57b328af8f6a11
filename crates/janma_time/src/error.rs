//! Error types for birth-time normalization.

use thiserror::Error;

/// Errors from parsing and validating birth data.
///
/// Each variant carries the offending input so callers can report it back
/// verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date format '{0}': expected YYYY-MM-DD")]
    InvalidDateFormat(String),
    /// Time string is not a valid 24-hour `HH:MM:SS` time.
    #[error("invalid time format '{0}': expected HH:MM:SS")]
    InvalidTimeFormat(String),
    /// Identifier is not present in the IANA timezone database.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
    /// Latitude is not finite or outside [-90, 90].
    #[error("invalid latitude {0}: expected a value in [-90, 90]")]
    InvalidLatitude(f64),
    /// Longitude is not finite or outside [-180, 180].
    #[error("invalid longitude {0}: expected a value in [-180, 180]")]
    InvalidLongitude(f64),
}
