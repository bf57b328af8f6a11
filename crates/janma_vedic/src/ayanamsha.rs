//! Fixed-offset ayanamsha and tropical → sidereal conversion.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to fixed stars).
//! Charts here use a single constant value rather than a precession model:
//! the offset does not change with the birth epoch.

/// Lahiri ayanamsha, fixed-epoch approximation, in degrees.
pub const LAHIRI_FIXED_DEG: f64 = 24.15;

/// Lahiri with the fixed 24.15 deg offset.
pub const LAHIRI_FIXED: Ayanamsha = Ayanamsha::new("lahiri", LAHIRI_FIXED_DEG);

/// A named, constant ayanamsha offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ayanamsha {
    name: &'static str,
    value_deg: f64,
}

impl Ayanamsha {
    pub const fn new(name: &'static str, value_deg: f64) -> Self {
        Self { name, value_deg }
    }

    /// Lower-case system name, as reported in chart metadata.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Offset in degrees.
    pub const fn value_deg(&self) -> f64 {
        self.value_deg
    }

    /// Convert a tropical longitude using this offset.
    pub fn to_sidereal(&self, tropical_lon_deg: f64) -> f64 {
        tropical_to_sidereal_with(tropical_lon_deg, self.value_deg)
    }
}

impl Default for Ayanamsha {
    fn default() -> Self {
        LAHIRI_FIXED
    }
}

/// Tropical → sidereal with the fixed Lahiri offset.
pub fn tropical_to_sidereal(tropical_lon_deg: f64) -> f64 {
    tropical_to_sidereal_with(tropical_lon_deg, LAHIRI_FIXED_DEG)
}

/// `tropical − ayanamsha`, plus 360 once if the difference is negative.
///
/// For tropical input in [0, 360) and an offset below 360 the result is in
/// [0, 360). Other inputs are not renormalized.
pub fn tropical_to_sidereal_with(tropical_lon_deg: f64, ayanamsha_deg: f64) -> f64 {
    let sidereal = tropical_lon_deg - ayanamsha_deg;
    if sidereal < 0.0 { sidereal + 360.0 } else { sidereal }
}
