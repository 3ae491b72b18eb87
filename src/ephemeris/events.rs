//! Solar noon, solar midnight and horizon crossings for a local calendar day.
//!
//! Events belong to the upper transit nearest the day's mean solar noon, so
//! consecutive dates always get consecutive transits. Rising and setting are
//! placed symmetrically around that transit using the declination at noon, so
//! `noon - sunrise == sunset - noon` holds exactly.

use super::{HOUR_ANGLE_RATE, SolarCoordinates, position_at};
use crate::error::{check_coordinates, check_elevation_angle};
use crate::math::{
    acos, asin_clamped, cos, degrees_to_radians, radians_to_degrees, round, sin,
};
use crate::time::{JulianDate, add_fraction_of_day, local_day_start};
use crate::types::DayCrossings;
use crate::{
    DayTimesOptions, GeoCoordinate, Horizon, HorizonCrossing, Result, SolarDayTimes, SunPosition,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Newton steps refining the transit; the first guess is within the equation of time.
const NOON_ITERATIONS: usize = 3;

/// Below this, cos(latitude)·cos(declination) means the observer stands on a pole.
const POLAR_DENOMINATOR: f64 = f64::EPSILON;

/// Transit of the sun for one local day.
#[derive(Debug, Clone, Copy)]
struct SolarTransit {
    noon: DateTime<Utc>,
    noon_position: SunPosition,
}

impl SolarTransit {
    fn find<Tz: TimeZone>(coordinate: GeoCoordinate, date: NaiveDate, tz: &Tz) -> Result<Self> {
        let day_start = local_day_start(date, tz)?;
        let day_start_jd = JulianDate::from_datetime(&day_start);

        let noon_jd = solar_noon(coordinate.longitude, day_start_jd);
        let noon = add_fraction_of_day(day_start, noon_jd.days_after(day_start_jd))?;
        let noon_position = position_at(coordinate, JulianDate::from_datetime(&noon));

        Ok(Self {
            noon,
            noon_position,
        })
    }

    fn crossing(&self, latitude: f64, elevation_angle: f64) -> Result<HorizonCrossing> {
        let offset = match hour_angle_at_threshold(
            latitude,
            self.noon_position.declination(),
            elevation_angle,
        ) {
            Threshold::Crossed(hour_angle) => hour_angle / HOUR_ANGLE_RATE,
            Threshold::AlwaysAbove => return Ok(HorizonCrossing::AlwaysAbove),
            Threshold::AlwaysBelow => return Ok(HorizonCrossing::AlwaysBelow),
        };

        Ok(HorizonCrossing::Crosses {
            rising: add_fraction_of_day(self.noon, -offset)?,
            setting: add_fraction_of_day(self.noon, offset)?,
        })
    }
}

enum Threshold {
    Crossed(f64),
    AlwaysAbove,
    AlwaysBelow,
}

/// Solves the sunrise equation for the hour angle at which the sun sits at
/// `elevation_angle` degrees.
fn hour_angle_at_threshold(latitude: f64, declination: f64, elevation_angle: f64) -> Threshold {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let sin_h0 = sin(degrees_to_radians(elevation_angle));

    let denominator = cos(phi) * cos(delta);
    if denominator <= POLAR_DENOMINATOR {
        // Elevation does not change over the day at a pole
        let noon_elevation = radians_to_degrees(asin_clamped(sin(phi) * sin(delta)));
        return if noon_elevation >= elevation_angle {
            Threshold::AlwaysAbove
        } else {
            Threshold::AlwaysBelow
        };
    }

    let cos_hour_angle = (sin_h0 - sin(phi) * sin(delta)) / denominator;
    if cos_hour_angle < -1.0 {
        Threshold::AlwaysAbove
    } else if cos_hour_angle > 1.0 {
        Threshold::AlwaysBelow
    } else {
        Threshold::Crossed(radians_to_degrees(acos(cos_hour_angle)))
    }
}

/// Upper transit belonging to the local day that starts at `day_start`.
///
/// Mean solar noons at `longitude` repeat exactly every 24 hours. The one
/// closest to the local clock noon anchors the search, and the true transit
/// lies within the equation of time (about 16 minutes at most) of it.
fn solar_noon(longitude: f64, day_start: JulianDate) -> JulianDate {
    let local_noon = day_start.add_days(0.5);
    // Julian dates turn over at 12:00 UT, where mean noon sits at longitude 0
    let cycle = round(local_noon.julian_date() + longitude / HOUR_ANGLE_RATE);
    let mean_noon = cycle - longitude / HOUR_ANGLE_RATE;
    let mut transit = local_noon.add_days(mean_noon - local_noon.julian_date());

    for _ in 0..NOON_ITERATIONS {
        let hour_angle = SolarCoordinates::at(transit).hour_angle(longitude);
        transit = transit.add_days(-hour_angle / HOUR_ANGLE_RATE);
    }
    transit
}

/// Calculate solar noon, solar midnight and the standard horizon crossings
/// for a local calendar day.
///
/// Uses [`DayTimesOptions::default`]: geometric sunrise at 0°, golden hour up
/// to +6°, blue hour from -6° to -4°, plus the three twilight depths.
///
/// # Arguments
/// * `coordinate` - Observer latitude/longitude in degrees
/// * `date` - Calendar date in the observer's time zone
/// * `tz` - Time zone defining where the local day starts
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
/// coordinates, and `InvalidDateTime` if an event falls outside chrono's range.
///
/// # Example
/// ```rust
/// use chrono::{FixedOffset, NaiveDate};
/// use sun_ephemeris::{ephemeris, GeoCoordinate};
///
/// let new_york = GeoCoordinate::new(40.7128, -74.0060).unwrap();
/// let edt = FixedOffset::west_opt(4 * 3600).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
///
/// let times = ephemeris::day_times(new_york, date, &edt).unwrap();
/// let sunrise = times.sunrise().unwrap();
/// let sunset = times.sunset().unwrap();
///
/// assert!(sunrise < times.solar_noon() && times.solar_noon() < sunset);
/// println!("Day length: {} min", times.day_length().num_minutes());
/// ```
pub fn day_times<Tz: TimeZone>(
    coordinate: GeoCoordinate,
    date: NaiveDate,
    tz: &Tz,
) -> Result<SolarDayTimes> {
    day_times_with_options(coordinate, date, tz, &DayTimesOptions::default())
}

/// Calculate the day's events with custom sunrise, golden hour and blue hour
/// thresholds.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
/// coordinates, `InvalidElevationAngle` for a bad custom threshold, and
/// `InvalidDateTime` if an event falls outside chrono's range.
pub fn day_times_with_options<Tz: TimeZone>(
    coordinate: GeoCoordinate,
    date: NaiveDate,
    tz: &Tz,
    options: &DayTimesOptions,
) -> Result<SolarDayTimes> {
    check_coordinates(coordinate.latitude, coordinate.longitude)?;
    let sunrise_sunset = options.sunrise_sunset().checked_elevation_angle()?;
    let golden_hour = options.golden_hour().checked_elevation_angle()?;
    let blue_hour = options.blue_hour().checked_elevation_angle()?;

    let transit = SolarTransit::find(coordinate, date, tz)?;
    let latitude = coordinate.latitude;

    let crossings = DayCrossings {
        sunrise_sunset: transit.crossing(latitude, sunrise_sunset)?,
        golden_hour: transit.crossing(latitude, golden_hour)?,
        blue_hour: transit.crossing(latitude, blue_hour)?,
        civil_twilight: transit.crossing(latitude, Horizon::CivilTwilight.elevation_angle())?,
        nautical_twilight: transit
            .crossing(latitude, Horizon::NauticalTwilight.elevation_angle())?,
        astronomical_twilight: transit
            .crossing(latitude, Horizon::AstronomicalTwilight.elevation_angle())?,
    };
    let solar_midnight = add_fraction_of_day(transit.noon, -0.5)?;

    log::trace!(
        "day times for {date} at ({}, {}): noon {}, sun {:?}",
        coordinate.latitude,
        coordinate.longitude,
        transit.noon,
        crossings.sunrise_sunset
    );

    Ok(SolarDayTimes::new(
        date,
        transit.noon,
        solar_midnight,
        transit.noon_position,
        crossings,
    ))
}

/// Calculate when the sun crosses a single horizon on a local calendar day.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
/// coordinates, `InvalidElevationAngle` for a bad custom horizon, and
/// `InvalidDateTime` if an event falls outside chrono's range.
///
/// # Example
/// ```rust
/// use chrono::{NaiveDate, Utc};
/// use sun_ephemeris::{ephemeris, GeoCoordinate, Horizon};
///
/// let tromso = GeoCoordinate::new(69.65, 18.96).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
///
/// let crossing = ephemeris::horizon_crossing(tromso, date, &Utc, Horizon::SunriseSunset).unwrap();
/// assert!(crossing.is_always_above());
/// ```
pub fn horizon_crossing<Tz: TimeZone>(
    coordinate: GeoCoordinate,
    date: NaiveDate,
    tz: &Tz,
    horizon: Horizon,
) -> Result<HorizonCrossing> {
    check_coordinates(coordinate.latitude, coordinate.longitude)?;
    let elevation_angle = horizon.elevation_angle();
    check_elevation_angle(elevation_angle)?;

    let transit = SolarTransit::find(coordinate, date, tz)?;
    let crossing = transit.crossing(coordinate.latitude, elevation_angle)?;
    log::trace!("{horizon:?} on {date}: {crossing:?}");
    Ok(crossing)
}
