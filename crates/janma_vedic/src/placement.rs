//! Full classification of one sidereal longitude.

use crate::element::{Element, Modality, element_of, modality_of};
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::rashi::{RashiInfo, rashi_from_longitude};

/// Everything derivable from a single sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealPlacement {
    /// The sidereal longitude that was classified, in degrees.
    pub sidereal_lon_deg: f64,
    pub rashi: RashiInfo,
    pub nakshatra: NakshatraInfo,
    pub element: Element,
    pub modality: Modality,
}

/// Classify a sidereal longitude into rashi, nakshatra, element and modality.
pub fn classify(sidereal_lon_deg: f64) -> SiderealPlacement {
    let rashi = rashi_from_longitude(sidereal_lon_deg);
    SiderealPlacement {
        sidereal_lon_deg,
        rashi,
        nakshatra: nakshatra_from_longitude(sidereal_lon_deg),
        element: element_of(rashi.rashi),
        modality: modality_of(rashi.rashi),
    }
}
