//! Birth-time normalization for janma.
//!
//! This crate provides:
//! - Parsing of birth date, time and IANA timezone into [`BirthInput`]
//! - Localization of civil time to a UTC instant, with a fixed DST policy
//! - The [`Epoch`] (year, month, fractional day) used for ephemeris lookup
//! - Julian Date ↔ calendar conversion

pub mod birth_input;
pub mod epoch;
pub mod error;
pub mod julian;

pub use birth_input::{BirthInput, localize, parse_date, parse_time, parse_timezone};
pub use epoch::Epoch;
pub use error::TimeError;
pub use julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD, calendar_to_jd, jd_to_centuries};

// Re-export so downstream crates don't need a direct chrono-tz dependency.
pub use chrono_tz::Tz;
