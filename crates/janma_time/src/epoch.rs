//! Ephemeris lookup epoch derived from a UTC instant.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::julian::{calendar_to_jd, jd_to_centuries};

/// Calendar epoch as (year, month, fractional day).
///
/// The fractional day folds hour, minute and second into the day number:
/// `day + (hour + minute/60 + second/3600) / 24`. Values are fixed at
/// construction; build a new `Epoch` if the instant changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epoch {
    year: i32,
    month: u32,
    day: f64,
}

impl Epoch {
    pub fn new(year: i32, month: u32, day: f64) -> Self {
        Self { year, month, day }
    }

    /// Build the epoch from the UTC calendar fields of `utc`.
    ///
    /// Sub-second precision is dropped.
    pub fn from_utc(utc: &DateTime<Utc>) -> Self {
        let hours = utc.hour() as f64 + utc.minute() as f64 / 60.0 + utc.second() as f64 / 3600.0;
        Self {
            year: utc.year(),
            month: utc.month(),
            day: utc.day() as f64 + hours / 24.0,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month including the time-of-day fraction.
    pub fn day(&self) -> f64 {
        self.day
    }

    /// Julian Date of this epoch.
    pub fn julian_day(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day)
    }

    /// Julian centuries since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        jd_to_centuries(self.julian_day())
    }
}

impl Display for Epoch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:09.6}", self.year, self.month, self.day)
    }
}
