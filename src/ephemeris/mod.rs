//! Low-precision solar ephemeris.
//!
//! Mean-orbit solar model from the Astronomical Almanac's "low precision
//! formulas for the sun": mean longitude and mean anomaly linear in time,
//! two equation-of-center terms, fixed obliquity. Accuracy is about 0.01° over
//! several centuries around J2000, which is enough to draw sun markers and
//! shadows but not for navigation. Formulas stay defined for any instant and
//! any latitude, poles included.
//!
//! All operations are pure: no caches, no shared state, safe to call from any
//! number of threads.

#![allow(clippy::unreadable_literal)]

use crate::error::check_coordinates;
use crate::math::{
    asin_clamped, atan2, cos, degrees_to_radians, mul_add, normalize_degrees_0_to_360,
    normalize_degrees_pm_180, polynomial, radians_to_degrees, sin,
};
use crate::time::JulianDate;
use crate::{GeoCoordinate, Result, SunPosition};
use chrono::{DateTime, TimeZone};

mod events;
mod path;

pub use events::{day_times, day_times_with_options, horizon_crossing};
pub use path::sun_path;

/// Obliquity of the ecliptic (Earth's axial tilt) in degrees.
pub const AXIAL_TILT: f64 = 23.439;

/// Mean longitude of the sun: degrees, degrees per day since J2000.0.
const MEAN_LONGITUDE: [f64; 2] = [280.460, 0.9856474];

/// Mean anomaly of the sun: degrees, degrees per day since J2000.0.
const MEAN_ANOMALY: [f64; 2] = [357.528, 0.9856003];

/// Equation of center amplitudes for sin(g) and sin(2g), in degrees.
const EQUATION_OF_CENTER: [f64; 2] = [1.915, 0.020];

/// Greenwich mean sidereal time: degrees, degrees per day since J2000.0.
const GREENWICH_SIDEREAL_TIME: [f64; 2] = [280.46061837, 360.98564736629];

/// Rate of the sun's hour angle over a mean solar day, in degrees per day.
pub(crate) const HOUR_ANGLE_RATE: f64 = 360.0;

/// Observer-independent solar coordinates at one instant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SolarCoordinates {
    /// Right ascension (degrees)
    right_ascension: f64,
    /// Declination (degrees)
    declination: f64,
    /// Greenwich mean sidereal time (degrees)
    sidereal_time: f64,
}

impl SolarCoordinates {
    pub(crate) fn at(jd: JulianDate) -> Self {
        let n = jd.days_since_j2000();

        let mean_longitude = normalize_degrees_0_to_360(polynomial(&MEAN_LONGITUDE, n));
        let mean_anomaly =
            degrees_to_radians(normalize_degrees_0_to_360(polynomial(&MEAN_ANOMALY, n)));
        let ecliptic_longitude = degrees_to_radians(
            mean_longitude
                + EQUATION_OF_CENTER[0] * sin(mean_anomaly)
                + EQUATION_OF_CENTER[1] * sin(2.0 * mean_anomaly),
        );

        let epsilon = degrees_to_radians(AXIAL_TILT);
        let sin_lambda = sin(ecliptic_longitude);

        let right_ascension =
            radians_to_degrees(atan2(cos(epsilon) * sin_lambda, cos(ecliptic_longitude)));
        let declination = radians_to_degrees(asin_clamped(sin(epsilon) * sin_lambda));
        let sidereal_time = normalize_degrees_0_to_360(polynomial(&GREENWICH_SIDEREAL_TIME, n));

        Self {
            right_ascension,
            declination,
            sidereal_time,
        }
    }

    /// Local hour angle in degrees (-180 to +180), zero at upper transit.
    ///
    /// Depends on longitude only, never on the observer's civil time zone.
    pub(crate) fn hour_angle(&self, longitude: f64) -> f64 {
        normalize_degrees_pm_180(self.sidereal_time + longitude - self.right_ascension)
    }

    pub(crate) const fn declination(&self) -> f64 {
        self.declination
    }
}

/// Converts declination and hour angle into the observer's horizontal frame.
fn horizontal_position(latitude: f64, declination: f64, hour_angle: f64) -> SunPosition {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let h = degrees_to_radians(hour_angle);

    let (sin_phi, cos_phi) = (sin(phi), cos(phi));
    let (sin_delta, cos_delta) = (sin(delta), cos(delta));
    let cos_h = cos(h);

    let elevation = radians_to_degrees(asin_clamped(mul_add(
        sin_phi,
        sin_delta,
        cos_phi * cos_delta * cos_h,
    )));

    // Measured from south by atan2, shifted to a bearing from north
    let azimuth_from_south = atan2(
        sin(h) * cos_delta,
        mul_add(cos_h * cos_delta, sin_phi, -(sin_delta * cos_phi)),
    );
    let azimuth = radians_to_degrees(azimuth_from_south) + 180.0;

    SunPosition::from_parts(azimuth, elevation, declination, hour_angle)
}

/// Position for already validated input.
pub(crate) fn position_at(coordinate: GeoCoordinate, jd: JulianDate) -> SunPosition {
    let solar = SolarCoordinates::at(jd);
    horizontal_position(
        coordinate.latitude,
        solar.declination(),
        solar.hour_angle(coordinate.longitude),
    )
}

/// Calculate the sun's position for an observer at an instant.
///
/// # Arguments
/// * `coordinate` - Observer latitude/longitude in degrees
/// * `instant` - Any timezone-aware instant; only its UTC value matters
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
///
/// # Example
/// ```rust
/// use chrono::{DateTime, FixedOffset};
/// use sun_ephemeris::{ephemeris, GeoCoordinate};
///
/// let vienna = GeoCoordinate::new(48.21, 16.37).unwrap();
/// let instant = "2026-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let position = ephemeris::sun_position(vienna, &instant).unwrap();
///
/// assert!(position.elevation() > 60.0);
/// println!("Azimuth: {:.3}°", position.azimuth());
/// println!("Elevation: {:.3}°", position.elevation());
/// ```
pub fn sun_position<Tz: TimeZone>(
    coordinate: GeoCoordinate,
    instant: &DateTime<Tz>,
) -> Result<SunPosition> {
    sun_position_from_julian(coordinate, JulianDate::from_datetime(instant))
}

/// Calculate the sun's position from a Julian date.
///
/// Numeric entry point for callers holding raw timestamps; build the
/// [`JulianDate`] with [`JulianDate::new`] or [`JulianDate::from_unix_seconds`],
/// which reject non-finite values.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
///
/// # Example
/// ```rust
/// use sun_ephemeris::{ephemeris, time::JulianDate, GeoCoordinate};
///
/// let equator = GeoCoordinate::new(0.0, 0.0).unwrap();
/// let jd = JulianDate::from_utc(2024, 3, 20, 12, 0, 0.0).unwrap();
/// let position = ephemeris::sun_position_from_julian(equator, jd).unwrap();
/// assert!(position.elevation() > 85.0);
/// ```
pub fn sun_position_from_julian(coordinate: GeoCoordinate, jd: JulianDate) -> Result<SunPosition> {
    check_coordinates(coordinate.latitude, coordinate.longitude)?;
    Ok(position_at(coordinate, jd))
}
