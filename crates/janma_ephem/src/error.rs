//! Errors raised by position providers.

use thiserror::Error;

use crate::Body;

/// Position provider errors. None of these are retried by callers.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider has no model for this body.
    #[error("unsupported body: {0}")]
    UnsupportedBody(Body),
    /// The provider does not implement this kind of computation.
    #[error("unsupported computation: {0}")]
    Unsupported(&'static str),
    /// Epoch lies outside the provider's validity range.
    #[error("epoch out of range: JD {jd}")]
    EpochOutOfRange { jd: f64 },
    /// The model produced NaN or infinity.
    #[error("non-finite longitude computed for {0}")]
    NonFinite(Body),
}
