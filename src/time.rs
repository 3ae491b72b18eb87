//! Time-related calculations for the solar ephemeris.
//!
//! Julian dates drive the astronomical formulas; the local-day helpers map a
//! calendar date in the observer's time zone onto the UTC time line.

#![allow(clippy::many_single_char_names)]

use crate::error::check_timestamp;
use crate::math::round;
use crate::{Error, Result};
use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone,
    Timelike, Utc,
};

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Milliseconds per day
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub(crate) const J2000_JDN: f64 = 2_451_545.0;

/// Julian Day of the Unix epoch (1970-01-01 00:00:00 UTC)
const UNIX_EPOCH_JDN: f64 = 2_440_587.5;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian date representation for astronomical calculations.
///
/// Always holds a finite value. Calendar input is interpreted in the proleptic
/// Gregorian calendar, matching chrono, so dates before 1582 line up with
/// `NaiveDate` values of the same year, month and day.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate {
    /// Julian Date (JD), UTC based
    jd: f64,
}

impl JulianDate {
    /// Wraps a raw Julian Day value.
    ///
    /// # Errors
    /// Returns `InvalidTimestamp` if `jd` is NaN or infinite.
    ///
    /// # Example
    /// ```
    /// # use sun_ephemeris::time::JulianDate;
    /// let jd = JulianDate::new(2_451_545.0).unwrap();
    /// assert_eq!(jd.days_since_j2000(), 0.0);
    /// assert!(JulianDate::new(f64::NAN).is_err());
    /// ```
    pub fn new(jd: f64) -> Result<Self> {
        check_timestamp(jd)?;
        Ok(Self { jd })
    }

    /// Creates a Julian date from seconds since the Unix epoch.
    ///
    /// # Errors
    /// Returns `InvalidTimestamp` if `seconds` is NaN or infinite.
    pub fn from_unix_seconds(seconds: f64) -> Result<Self> {
        check_timestamp(seconds)?;
        Self::new(UNIX_EPOCH_JDN + seconds / SECONDS_PER_DAY)
    }

    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// The instant is converted to UTC first; the observer's civil time zone
    /// plays no part in solar geometry.
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&Utc);
        let second = f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9;
        let jd = calculate_julian_date(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            second,
        );
        Self { jd }
    }

    /// Creates a Julian date from year, month, day, hour, minute, and second in UTC.
    ///
    /// # Arguments
    /// * `year` - Year (can be negative; proleptic Gregorian)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59, can include fractional seconds)
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is outside its valid range.
    ///
    /// # Example
    /// ```
    /// # use sun_ephemeris::time::JulianDate;
    /// let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
    /// assert_eq!(jd.julian_date(), 2_451_545.0);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        let jd = calculate_julian_date(year, month, day, hour, minute, second);
        Ok(Self { jd })
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Days elapsed since the J2000.0 epoch (negative before it).
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.jd - J2000_JDN
    }

    /// Calculates the Julian Century (JC) from J2000.0.
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }

    pub(crate) fn add_days(self, days: f64) -> Self {
        Self { jd: self.jd + days }
    }

    pub(crate) fn days_after(self, earlier: Self) -> f64 {
        self.jd - earlier.jd
    }
}

/// Calculates Julian Date from UTC date/time components.
///
/// Counts whole days in the proleptic Gregorian calendar with integer
/// arithmetic (era/year-of-era decomposition), so negative years are exact.
fn calculate_julian_date(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    let days = days_from_unix_epoch(i64::from(year), i64::from(month), i64::from(day));
    let fraction = (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;
    UNIX_EPOCH_JDN + days as f64 + fraction
}

/// Days from 1970-01-01 to the given proleptic Gregorian date.
fn days_from_unix_epoch(year: i64, month: i64, day: i64) -> i64 {
    // Years start in March so the leap day is the last day of the year
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let month_from_march = (month + 9) % 12;
    let day_of_year = (153 * month_from_march + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// UTC instant at which `date` begins in `tz`.
///
/// When local midnight falls into a DST gap the day begins at the first wall
/// clock reading that exists. A date skipped entirely by its zone falls back
/// to the offset reported for that wall clock reading.
pub(crate) fn local_day_start<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<DateTime<Utc>> {
    let midnight = date.and_time(NaiveTime::MIN);
    if let Some(start) = tz.from_local_datetime(&midnight).earliest() {
        return Ok(start.with_timezone(&Utc));
    }

    // Gaps may end off the minute in zones still on local mean time
    let exists = |reading: &NaiveDateTime| tz.from_local_datetime(reading).earliest();
    for minutes in 1..24 * 60 {
        let Some(candidate) = midnight.checked_add_signed(TimeDelta::minutes(minutes)) else {
            break;
        };
        let Some(found) = exists(&candidate) else {
            continue;
        };
        let (reading, start) = (1..60)
            .rev()
            .map(|seconds| candidate - TimeDelta::seconds(seconds))
            .find_map(|reading| exists(&reading).map(|start| (reading, start)))
            .unwrap_or((candidate, found));
        log::trace!("local midnight of {date} is skipped, day starts at {reading}");
        return Ok(start.with_timezone(&Utc));
    }

    let offset = tz.offset_from_utc_datetime(&midnight).fix();
    shift_naive(midnight, -i64::from(offset.local_minus_utc()))
}

fn shift_naive(naive: NaiveDateTime, seconds: i64) -> Result<DateTime<Utc>> {
    TimeDelta::try_seconds(seconds)
        .and_then(|delta| naive.checked_add_signed(delta))
        .map(|shifted| shifted.and_utc())
        .ok_or_else(|| Error::invalid_datetime("date is outside the representable range"))
}

/// Adds a fractional number of days to an instant, rounded to the millisecond.
///
/// # Errors
/// Returns `InvalidDateTime` if the result leaves chrono's representable range.
pub(crate) fn add_fraction_of_day(start: DateTime<Utc>, days: f64) -> Result<DateTime<Utc>> {
    let millis = round(days * MILLIS_PER_DAY) as i64;
    TimeDelta::try_milliseconds(millis)
        .and_then(|delta| start.checked_add_signed(delta))
        .ok_or_else(|| Error::invalid_datetime("solar event falls outside the representable range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_days_from_unix_epoch() {
        assert_eq!(days_from_unix_epoch(1970, 1, 1), 0);
        assert_eq!(days_from_unix_epoch(2000, 3, 1), 11_017);
        assert_eq!(days_from_unix_epoch(1969, 12, 31), -1);
        assert_eq!(days_from_unix_epoch(-1000, 3, 1), -1_084_711);
    }

    #[test]
    fn test_julian_date_creation() {
        let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert!((jd.julian_date() - J2000_JDN).abs() < EPSILON);
        assert!(jd.days_since_j2000().abs() < EPSILON);
        assert!(jd.julian_century().abs() < EPSILON);
    }

    #[test]
    fn test_julian_date_rejects_non_finite() {
        assert_eq!(
            JulianDate::new(f64::NAN).unwrap_err().field(),
            crate::InputField::Timestamp
        );
        assert!(JulianDate::new(f64::INFINITY).is_err());
        assert!(JulianDate::from_unix_seconds(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_julian_date_validation() {
        assert!(JulianDate::from_utc(2024, 13, 1, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 1, 32, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 1, 0, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 1, 1, 24, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 1, 1, 0, 60, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 1, 1, 0, 0, 60.0).is_err());
    }

    #[test]
    fn test_proleptic_gregorian_leap_days() {
        assert!(JulianDate::from_utc(2024, 2, 29, 0, 0, 0.0).is_ok());
        assert!(JulianDate::from_utc(2000, 2, 29, 0, 0, 0.0).is_ok());
        assert!(JulianDate::from_utc(1900, 2, 29, 0, 0, 0.0).is_err());
        // 1500 is a leap year only in the Julian calendar
        assert!(JulianDate::from_utc(1500, 2, 29, 0, 0, 0.0).is_err());
        // No calendar reform gap
        assert!(JulianDate::from_utc(1582, 10, 10, 0, 0, 0.0).is_ok());
    }

    #[test]
    fn test_specific_julian_dates() {
        let unix_epoch = JulianDate::from_utc(1970, 1, 1, 0, 0, 0.0).unwrap();
        assert!((unix_epoch.julian_date() - UNIX_EPOCH_JDN).abs() < 1e-6);

        let y2k = JulianDate::from_utc(2000, 1, 1, 0, 0, 0.0).unwrap();
        assert!((y2k.julian_date() - 2_451_544.5).abs() < 1e-6);

        // Meeus example 7.a: 1957 October 4.81
        let sputnik = JulianDate::from_utc(1957, 10, 4, 19, 26, 24.0).unwrap();
        assert!((sputnik.julian_date() - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn test_calendar_and_timestamp_paths_agree() {
        let datetime = "2024-06-21T12:34:56.5-04:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let from_calendar = JulianDate::from_datetime(&datetime);
        let seconds = datetime.timestamp() as f64 + 0.5;
        let from_unix = JulianDate::from_unix_seconds(seconds).unwrap();
        assert!((from_calendar.julian_date() - from_unix.julian_date()).abs() < 1e-8);
    }

    #[test]
    fn test_far_past_matches_chrono_calendar() {
        // Proleptic Gregorian on both sides, so the day count stays consistent
        let datetime = NaiveDate::from_ymd_opt(-1000, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        let from_calendar = JulianDate::from_datetime(&datetime);
        let from_unix = JulianDate::from_unix_seconds(datetime.timestamp() as f64).unwrap();
        assert!((from_calendar.julian_date() - from_unix.julian_date()).abs() < 1e-6);
    }

    #[test]
    fn test_local_day_start_fixed_offset() {
        let tz = FixedOffset::west_opt(4 * 3600).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let start = local_day_start(date, &tz).unwrap();
        assert_eq!(start.to_rfc3339(), "2024-06-21T04:00:00+00:00");
    }

    #[test]
    fn test_add_fraction_of_day() {
        let start = "2024-03-20T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let noon = add_fraction_of_day(start, 0.5).unwrap();
        assert_eq!(noon.to_rfc3339(), "2024-03-20T12:00:00+00:00");

        let before = add_fraction_of_day(start, -0.25).unwrap();
        assert_eq!(before.to_rfc3339(), "2024-03-19T18:00:00+00:00");

        assert!(add_fraction_of_day(DateTime::<Utc>::MAX_UTC, 1.0).is_err());
    }
}
