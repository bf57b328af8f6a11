//! Birth data parsing and localization to a UTC instant.
//!
//! Local civil time is resolved against the IANA timezone database with a
//! fixed policy for DST transitions:
//! - an ambiguous local time (clocks set back) takes the standard-time
//!   offset, i.e. the occurrence without a DST component;
//! - a nonexistent local time (clocks set forward) is read with the offset
//!   in force before the gap.
//!
//! Both cases are logged at `warn`.

use chrono::{
    DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone,
    Timelike, Utc,
};
use chrono_tz::{OffsetComponents, Tz};
use log::{debug, warn};

use crate::error::TimeError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Validated birth data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthInput {
    date: NaiveDate,
    time: NaiveTime,
    latitude_deg: f64,
    longitude_deg: f64,
    timezone: Tz,
}

impl BirthInput {
    /// Build from already-typed values, validating the coordinates.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        latitude_deg: f64,
        longitude_deg: f64,
        timezone: Tz,
    ) -> Result<Self, TimeError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(TimeError::InvalidLatitude(latitude_deg));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(TimeError::InvalidLongitude(longitude_deg));
        }
        Ok(Self {
            date,
            time,
            latitude_deg,
            longitude_deg,
            timezone,
        })
    }

    /// Parse `YYYY-MM-DD`, `HH:MM:SS` and an IANA zone name.
    pub fn parse(
        date: &str,
        time: &str,
        latitude_deg: f64,
        longitude_deg: f64,
        timezone: &str,
    ) -> Result<Self, TimeError> {
        let date = parse_date(date)?;
        let time = parse_time(time)?;
        let timezone = parse_timezone(timezone)?;
        Self::new(date, time, latitude_deg, longitude_deg, timezone)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Geographic latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Geographic longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Local civil date-time, before timezone resolution.
    pub fn local_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// The birth instant in UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        localize(self.timezone, self.local_datetime())
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| TimeError::InvalidDateFormat(s.to_string()))
}

/// Parse a 24-hour `HH:MM:SS` time of day.
pub fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    let time = NaiveTime::parse_from_str(s, TIME_FORMAT)
        .map_err(|_| TimeError::InvalidTimeFormat(s.to_string()))?;
    // `%S` accepts 60 as a leap second; birth times never carry one.
    if time.nanosecond() >= 1_000_000_000 {
        return Err(TimeError::InvalidTimeFormat(s.to_string()));
    }
    Ok(time)
}

/// Look up an IANA timezone identifier.
pub fn parse_timezone(s: &str) -> Result<Tz, TimeError> {
    s.parse::<Tz>()
        .map_err(|_| TimeError::UnknownTimezone(s.to_string()))
}

/// Resolve a local civil time in `tz` to a UTC instant.
pub fn localize(tz: Tz, local: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => {
            debug!("{local} {tz} -> {}", dt.with_timezone(&Utc));
            dt.with_timezone(&Utc)
        }
        LocalResult::Ambiguous(earliest, latest) => {
            let chosen = if earliest.offset().dst_offset() == TimeDelta::zero() {
                earliest
            } else {
                latest
            };
            warn!(
                "ambiguous local time {local} in {tz}; using standard-time offset {}",
                chosen.offset().fix()
            );
            chosen.with_timezone(&Utc)
        }
        LocalResult::None => {
            let offset = tz
                .offset_from_utc_datetime(&(local - TimeDelta::days(1)))
                .fix();
            warn!("nonexistent local time {local} in {tz}; using pre-transition offset {offset}");
            let utc = local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
            Utc.from_utc_datetime(&utc)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_input() {
        let input =
            BirthInput::parse("1992-03-15", "14:30:00", 29.7604, -95.3698, "America/Chicago")
                .unwrap();
        assert_eq!(input.date(), NaiveDate::from_ymd_opt(1992, 3, 15).unwrap());
        assert_eq!(input.time(), NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert_eq!(input.timezone(), Tz::America__Chicago);
        assert_eq!(input.latitude_deg(), 29.7604);
        assert_eq!(input.longitude_deg(), -95.3698);
    }

    #[test]
    fn chicago_standard_time_to_utc() {
        let input =
            BirthInput::parse("1992-03-15", "14:30:00", 29.7604, -95.3698, "America/Chicago")
                .unwrap();
        let utc = input.to_utc();
        // CST (UTC-6) in mid-March 1992; DST began 1992-04-05.
        assert_eq!(utc, Utc.with_ymd_and_hms(1992, 3, 15, 20, 30, 0).unwrap());
    }

    #[test]
    fn utc_zone_is_identity() {
        let input = BirthInput::parse("2000-01-01", "12:00:00", 0.0, 0.0, "UTC").unwrap();
        assert_eq!(input.to_utc(), Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn east_of_greenwich_crosses_date_line_backwards() {
        let input = BirthInput::parse("2024-01-01", "03:00:00", 35.68, 139.69, "Asia/Tokyo").unwrap();
        let utc = input.to_utc();
        assert_eq!(utc, Utc.with_ymd_and_hms(2023, 12, 31, 18, 0, 0).unwrap());
    }

    #[test]
    fn invalid_date_rejected() {
        let err = parse_date("1992-02-30").unwrap_err();
        assert_eq!(err, TimeError::InvalidDateFormat("1992-02-30".into()));
        assert!(matches!(parse_date("15/03/1992"), Err(TimeError::InvalidDateFormat(_))));
    }

    #[test]
    fn invalid_time_rejected() {
        assert!(matches!(parse_time("25:00:00"), Err(TimeError::InvalidTimeFormat(_))));
        assert!(matches!(parse_time("14:30"), Err(TimeError::InvalidTimeFormat(_))));
    }

    #[test]
    fn leap_second_rejected() {
        assert_eq!(
            parse_time("14:30:60"),
            Err(TimeError::InvalidTimeFormat("14:30:60".into()))
        );
        assert!(matches!(
            BirthInput::parse("1992-03-15", "14:30:60", 0.0, 0.0, "UTC"),
            Err(TimeError::InvalidTimeFormat(_))
        ));
        assert_eq!(
            parse_time("23:59:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 59).unwrap()
        );
    }

    #[test]
    fn unknown_timezone_rejected() {
        let err = parse_timezone("Nowhere/Fake").unwrap_err();
        assert_eq!(err, TimeError::UnknownTimezone("Nowhere/Fake".into()));
        assert!(err.to_string().contains("Nowhere/Fake"));
    }

    #[test]
    fn coordinates_validated() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let time = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert!(matches!(
            BirthInput::new(date, time, 91.0, 0.0, Tz::UTC),
            Err(TimeError::InvalidLatitude(_))
        ));
        assert!(matches!(
            BirthInput::new(date, time, 0.0, -180.5, Tz::UTC),
            Err(TimeError::InvalidLongitude(_))
        ));
        assert!(matches!(
            BirthInput::new(date, time, f64::NAN, 0.0, Tz::UTC),
            Err(TimeError::InvalidLatitude(_))
        ));
        assert!(BirthInput::new(date, time, -90.0, 180.0, Tz::UTC).is_ok());
    }

    #[test]
    fn ambiguous_time_takes_standard_offset() {
        // 2021-11-07 01:30 happens twice in Chicago: CDT (-5) then CST (-6).
        let local = NaiveDate::from_ymd_opt(2021, 11, 7)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();
        let utc = localize(Tz::America__Chicago, local);
        assert_eq!(utc, Utc.with_ymd_and_hms(2021, 11, 7, 7, 30, 0).unwrap());
    }

    #[test]
    fn nonexistent_time_uses_offset_before_gap() {
        // 2021-03-14 02:30 is skipped in Chicago; read it as CST (-6).
        let local = NaiveDate::from_ymd_opt(2021, 3, 14)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let utc = localize(Tz::America__Chicago, local);
        assert_eq!(utc.hour(), 8);
        assert_eq!(utc, Utc.with_ymd_and_hms(2021, 3, 14, 8, 30, 0).unwrap());
    }
}
