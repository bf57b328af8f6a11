//! One classified chart position.

use janma_vedic::{
    Ayanamsha, Element, Graha, Modality, Nakshatra, Rashi, classify, round_to_hundredths,
};
use serde::Serialize;

/// Sign, degree and nakshatra of one body, as emitted in chart JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialPosition {
    pub sign: Rashi,
    /// Degrees within the sign, rounded to two decimals.
    pub sidereal_degree: f64,
    pub nakshatra: Nakshatra,
    pub nakshatra_ruler: Graha,
    pub modality: Modality,
    pub element: Element,
}

impl CelestialPosition {
    /// Classify a sidereal longitude in degrees.
    pub fn from_sidereal(sidereal_lon_deg: f64) -> Self {
        let p = classify(sidereal_lon_deg);
        Self {
            sign: p.rashi.rashi,
            sidereal_degree: round_to_hundredths(p.rashi.degrees_in_rashi),
            nakshatra: p.nakshatra.nakshatra,
            nakshatra_ruler: p.nakshatra.ruler,
            modality: p.modality,
            element: p.element,
        }
    }

    /// Shift a tropical longitude by `ayanamsha`, then classify.
    pub fn from_tropical(tropical_lon_deg: f64, ayanamsha: &Ayanamsha) -> Self {
        Self::from_sidereal(ayanamsha.to_sidereal(tropical_lon_deg))
    }
}
