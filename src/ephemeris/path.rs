//! Sun path sampling over a local calendar day.

use super::position_at;
use crate::error::{check_coordinates, check_elevation_angle, check_sample_interval};
use crate::time::{JulianDate, local_day_start};
use crate::{Error, GeoCoordinate, Result, SunPathOptions, SunPathSample};
use alloc::vec::Vec;
use chrono::{NaiveDate, TimeDelta, TimeZone};

/// Sample the sun's position across a local calendar day.
///
/// Samples start at the first instant of `date` in `tz` and repeat every
/// `options.interval_minutes()` for 24 hours, so a 15-minute interval yields
/// 96 samples in strictly ascending time order. Each sample equals what
/// [`sun_position`](super::sun_position) returns for its instant.
///
/// With [`SunPathOptions::only_above`], samples at or below the threshold are
/// dropped; the rest keep their order.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
/// coordinates, `InvalidSampleInterval` unless the interval is between 1 and
/// 120 minutes, `InvalidElevationAngle` for a bad filter threshold, and
/// `InvalidDateTime` if the day lies outside chrono's range.
///
/// # Example
/// ```rust
/// use chrono::{NaiveDate, Utc};
/// use sun_ephemeris::{ephemeris, GeoCoordinate, SunPathOptions};
///
/// let london = GeoCoordinate::new(51.5074, -0.1278).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
///
/// let options = SunPathOptions::new(15).unwrap();
/// let path = ephemeris::sun_path(london, date, &Utc, &options).unwrap();
/// assert_eq!(path.len(), 96);
///
/// let visible = ephemeris::sun_path(london, date, &Utc, &options.only_above(0.0).unwrap()).unwrap();
/// assert!(visible.iter().all(|s| s.position().elevation() > 0.0));
/// ```
pub fn sun_path<Tz: TimeZone>(
    coordinate: GeoCoordinate,
    date: NaiveDate,
    tz: &Tz,
    options: &SunPathOptions,
) -> Result<Vec<SunPathSample>> {
    check_coordinates(coordinate.latitude, coordinate.longitude)?;
    check_sample_interval(options.interval_minutes())?;
    if !options.include_below_horizon() {
        check_elevation_angle(options.horizon_threshold())?;
    }

    let start = local_day_start(date, tz)?;
    let interval = i64::from(options.interval_minutes());
    let count = options.sample_count();

    let mut samples = Vec::with_capacity(count as usize);
    for k in 0..i64::from(count) {
        let timestamp = start
            .checked_add_signed(TimeDelta::minutes(k * interval))
            .ok_or_else(|| Error::invalid_datetime("sun path extends beyond supported range"))?;
        let position = position_at(coordinate, JulianDate::from_datetime(&timestamp));
        if options.keeps(&position) {
            samples.push(SunPathSample::new(timestamp, position));
        }
    }

    log::trace!(
        "sun path for {date} at ({}, {}): {} of {count} samples kept",
        coordinate.latitude,
        coordinate.longitude,
        samples.len()
    );

    Ok(samples)
}
