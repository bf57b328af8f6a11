//! Julian Date ↔ calendar conversion.
//!
//! Calendar dates on or after 1582-10-15 are Gregorian; earlier dates are
//! proleptic Julian. The switch matches the historical reform so that
//! 1582-10-04 and 1582-10-15 are consecutive days.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in one Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Convert a calendar date with fractional day to a Julian Date.
///
/// `day` may carry a time-of-day fraction, e.g. `4.81` for 19:26:24 on the
/// 4th.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let m = m as f64;
    let b = if is_gregorian(year, month, day) {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

fn is_gregorian(year: i32, month: u32, day: f64) -> bool {
    (year, month, day) >= (1582, 10, 15.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert!((calendar_to_jd(2000, 1, 1.5) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn sputnik_launch() {
        // Meeus, Astronomical Algorithms, example 7.a
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn julian_calendar_date() {
        // Meeus example 7.b: 333 January 27, 12h
        let jd = calendar_to_jd(333, 1, 27.5);
        assert!((jd - 1_842_713.0).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn reform_days_are_consecutive() {
        let before = calendar_to_jd(1582, 10, 4.0);
        let after = calendar_to_jd(1582, 10, 15.0);
        assert!((after - before - 1.0).abs() < 1e-9);
    }

    #[test]
    fn january_uses_previous_year() {
        let dec = calendar_to_jd(1999, 12, 31.0);
        let jan = calendar_to_jd(2000, 1, 1.0);
        assert!((jan - dec - 1.0).abs() < 1e-9);
    }

    #[test]
    fn centuries_at_j2000_is_zero() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
    }

    #[test]
    fn one_century_later() {
        let t = jd_to_centuries(J2000_JD + DAYS_PER_JULIAN_CENTURY);
        assert!((t - 1.0).abs() < 1e-15);
    }
}
