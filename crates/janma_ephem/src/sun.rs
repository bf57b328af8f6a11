//! Low-accuracy solar longitude (Meeus, Astronomical Algorithms, ch. 25).
//!
//! Accuracy is about 0.01 deg, referred to the mean equinox of date. No
//! aberration or nutation is applied: the result is the geometric true
//! longitude.

use crate::normalize_360;

/// Geometric true longitude of the Sun in degrees, [0, 360).
///
/// `t` is Julian centuries of dynamical time since J2000.0.
pub fn sun_true_longitude_deg(t: f64) -> f64 {
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    normalize_360(l0 + c)
}
