//! Analytic Sun/Moon provider built on the Meeus series.

use janma_time::Epoch;
use log::debug;

use crate::{Body, EphemerisError, PositionProvider, moon_longitude_deg, sun_true_longitude_deg};

/// Metadata tag for this provider.
pub const MEEUS_SOURCE_TAG: &str = "meeus_analytic_v1";

/// Validity window in Julian centuries around J2000.0.
const MAX_ABS_CENTURIES: f64 = 40.0;

/// Sun and Moon from closed-form series; no data files needed.
///
/// The epoch is taken as dynamical time directly (ΔT is ignored, a shift of
/// about a minute for modern dates). Mercury is not modelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeeusEphemeris;

impl MeeusEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl PositionProvider for MeeusEphemeris {
    fn source_tag(&self) -> &str {
        MEEUS_SOURCE_TAG
    }

    fn geocentric_longitude(&self, body: Body, epoch: &Epoch) -> Result<f64, EphemerisError> {
        let jd = epoch.julian_day();
        let t = epoch.centuries_since_j2000();
        if !t.is_finite() || t.abs() > MAX_ABS_CENTURIES {
            return Err(EphemerisError::EpochOutOfRange { jd });
        }
        let lon = match body {
            Body::Sun => sun_true_longitude_deg(t),
            Body::Moon => moon_longitude_deg(t),
            Body::Mercury => return Err(EphemerisError::UnsupportedBody(body)),
        };
        if !lon.is_finite() {
            return Err(EphemerisError::NonFinite(body));
        }
        debug!("{body} at JD {jd:.6}: {lon:.6} deg");
        Ok(lon)
    }
}
