//! Geocentric ecliptic longitudes for chart bodies.
//!
//! The chart pipeline only needs one number per body: the geocentric
//! ecliptic longitude at an [`Epoch`]. [`PositionProvider`] is the seam
//! where that number comes from; [`MeeusEphemeris`] is the bundled
//! analytic implementation.

pub mod error;
pub mod meeus;
pub mod moon;
pub mod sun;

use std::fmt::{Display, Formatter};

use janma_time::Epoch;

pub use error::EphemerisError;
pub use meeus::MeeusEphemeris;
pub use moon::moon_longitude_deg;
pub use sun::sun_true_longitude_deg;

/// Bodies a chart may ask a provider for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Source of geocentric ecliptic longitudes.
///
/// Implementations return degrees in [0, 360). Callers pass the value on
/// without range checks.
pub trait PositionProvider: Send + Sync {
    /// Short identifier recorded in chart metadata.
    fn source_tag(&self) -> &str;

    /// Geocentric ecliptic longitude of `body` at `epoch`, in degrees.
    fn geocentric_longitude(&self, body: Body, epoch: &Epoch) -> Result<f64, EphemerisError>;

    /// Ecliptic longitude of the rising point for an observer.
    ///
    /// Providers without a house model keep the default.
    fn ascendant_longitude(
        &self,
        _epoch: &Epoch,
        _latitude_deg: f64,
        _longitude_deg: f64,
    ) -> Result<f64, EphemerisError> {
        Err(EphemerisError::Unsupported("ascendant"))
    }
}

/// Normalize an angle to [0, 360) degrees.
pub(crate) fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}
