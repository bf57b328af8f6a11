//! Sidereal zodiac classification for janma charts.
//!
//! This crate provides:
//! - Fixed-offset ayanamsha and tropical → sidereal conversion
//! - Rashi (zodiac sign) and 27-nakshatra lookup with ruling graha
//! - Element and modality membership tables
//!
//! All tables are `const` data; every function is pure.

pub mod ayanamsha;
pub mod element;
pub mod graha;
pub mod nakshatra;
pub mod placement;
pub mod rashi;
pub mod util;

pub use ayanamsha::{
    Ayanamsha, LAHIRI_FIXED, LAHIRI_FIXED_DEG, tropical_to_sidereal, tropical_to_sidereal_with,
};
pub use element::{
    Element, Modality, element_of, element_of_sign_name, modality_of, modality_of_sign_name,
};
pub use graha::{ALL_GRAHAS, Graha, NAKSHATRA_LORD_CYCLE, nakshatra_lord};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_index,
};
pub use placement::{SiderealPlacement, classify};
pub use rashi::{
    ALL_RASHIS, RASHI_SPAN, Rashi, RashiInfo, degrees_in_rashi, rashi_from_longitude, rashi_index,
};
pub use util::round_to_hundredths;
