//! Chart-level error type.

use janma_ephem::EphemerisError;
use janma_time::TimeError;
use thiserror::Error;

/// Everything that can stop a chart from being produced.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth date, time, timezone or coordinates were rejected.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// The position provider failed for a body or the ascendant.
    #[error("ephemeris computation failed: {0}")]
    Ephemeris(#[from] EphemerisError),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
