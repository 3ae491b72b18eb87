//! Core data types for solar ephemeris calculations.

use crate::error::{check_coordinates, check_elevation_angle, check_sample_interval};
use crate::math::{degrees_to_radians, normalize_degrees_0_to_360, tan};
use crate::Result;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// Minutes in a civil day, the span covered by a sun path.
pub(crate) const MINUTES_PER_DAY: u32 = 24 * 60;

/// Geographic position of an observer in degrees (WGS84-style latitude/longitude).
///
/// Fields are public so callers can build coordinates from map input directly;
/// every ephemeris operation validates them again before computing.
///
/// # Example
/// ```
/// # use sun_ephemeris::GeoCoordinate;
/// let nyc = GeoCoordinate::new(40.7128, -74.0060).unwrap();
/// assert_eq!(nyc.latitude, 40.7128);
/// assert!(GeoCoordinate::new(95.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoCoordinate {
    /// Latitude in degrees, positive north (-90 to +90)
    pub latitude: f64,
    /// Longitude in degrees, positive east (-180 to +180)
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Creates a validated coordinate.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Re-checks the public fields.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or non-finite values.
    pub fn validate(&self) -> Result<()> {
        check_coordinates(self.latitude, self.longitude)
    }
}

/// Predefined elevation thresholds for daily solar events.
///
/// Thresholds refer to the geometric centre of the solar disc, without refraction.
///
/// Equality compares `Custom` angles by value with `-0.0 == 0.0`; a NaN angle
/// equals the same NaN, so `Horizon` can be a set or map key.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Horizon {
    /// Sunrise/sunset: sun centre on the geometric horizon (0°)
    SunriseSunset,
    /// Upper edge of the golden hour band (sun 6° above horizon)
    GoldenHour,
    /// Upper edge of the blue hour band (sun 4° below horizon)
    BlueHour,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom elevation angle
    Custom(f64),
}

impl Horizon {
    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => 0.0,
            Self::GoldenHour => 6.0,
            Self::BlueHour => -4.0,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    ///
    /// # Example
    /// ```
    /// # use sun_ephemeris::Horizon;
    /// // Apparent sunrise: upper limb on the horizon, standard refraction
    /// let apparent = Horizon::custom(-0.833).unwrap();
    /// assert_eq!(apparent.elevation_angle(), -0.833);
    /// ```
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        check_elevation_angle(elevation_degrees)?;
        Ok(Self::Custom(elevation_degrees))
    }

    /// Returns the elevation angle after validating it.
    ///
    /// Needed because `Custom` can be built directly with any value.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    pub fn checked_elevation_angle(&self) -> Result<f64> {
        let angle = self.elevation_angle();
        check_elevation_angle(angle)?;
        Ok(angle)
    }
}

impl Horizon {
    /// Variant tag and angle bits with the zero sign folded.
    fn identity(&self) -> (u8, u64) {
        let (tag, angle) = match self {
            Self::SunriseSunset => (0, 0.0),
            Self::GoldenHour => (1, 0.0),
            Self::BlueHour => (2, 0.0),
            Self::CivilTwilight => (3, 0.0),
            Self::NauticalTwilight => (4, 0.0),
            Self::AstronomicalTwilight => (5, 0.0),
            Self::Custom(angle) => (6, *angle),
        };
        let angle = if angle == 0.0 { 0.0 } else { angle };
        (tag, angle.to_bits())
    }
}

impl PartialEq for Horizon {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Horizon {}

impl core::hash::Hash for Horizon {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

/// Apparent position of the sun for an observer.
///
/// Uses the standard astronomical coordinate system where:
/// - Azimuth: 0° = North, measured clockwise to 360° (90° = East, 180° = South)
/// - Elevation: 90° = directly overhead, 0° = horizon, negative = below horizon
/// - Declination: the sun's celestial declination, independent of the observer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    azimuth: f64,
    elevation: f64,
    declination: f64,
    hour_angle: f64,
}

impl SunPosition {
    pub(crate) fn from_parts(
        azimuth: f64,
        elevation: f64,
        declination: f64,
        hour_angle: f64,
    ) -> Self {
        Self {
            azimuth: normalize_degrees_0_to_360(azimuth),
            elevation: elevation.clamp(-90.0, 90.0),
            declination,
            hour_angle,
        }
    }

    /// Gets the azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the elevation angle in degrees (-90° to +90°).
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Gets the solar declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the local hour angle in degrees (-180° to +180°, 0° at solar noon, positive afternoon).
    #[must_use]
    pub const fn hour_angle(&self) -> f64 {
        self.hour_angle
    }

    /// Gets the zenith angle in degrees: zenith = 90° - elevation.
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.elevation
    }

    /// Checks if the sun is above the horizon (elevation angle > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation > 0.0
    }

    /// Checks if the sun is at or below the horizon (elevation angle ≤ 0°).
    #[must_use]
    pub fn is_sun_down(&self) -> bool {
        self.elevation <= 0.0
    }

    /// Length of the shadow cast on level ground by a vertical object.
    ///
    /// Returned in the unit of `object_height`. `None` while the sun is at or
    /// below the horizon, where no finite shadow exists.
    ///
    /// # Example
    /// ```
    /// # use chrono::{TimeZone, Utc};
    /// # use sun_ephemeris::{ephemeris, GeoCoordinate};
    /// let coordinate = GeoCoordinate::new(40.7128, -74.0060).unwrap();
    /// let instant = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
    /// let position = ephemeris::sun_position(coordinate, &instant).unwrap();
    /// // Early morning: shadows about twice as long as the object is tall
    /// let shadow = position.shadow_length(10.0).unwrap();
    /// assert!(shadow > 15.0 && shadow < 25.0);
    /// ```
    #[must_use]
    pub fn shadow_length(&self, object_height: f64) -> Option<f64> {
        if self.is_sun_down() {
            return None;
        }
        Some(object_height / tan(degrees_to_radians(self.elevation)))
    }

    /// Compass bearing the shadow points to (opposite the sun).
    #[must_use]
    pub fn shadow_azimuth(&self) -> f64 {
        normalize_degrees_0_to_360(self.azimuth + 180.0)
    }
}

/// How the sun behaves relative to one elevation threshold over a day.
///
/// Continuous day or night relative to the threshold is an ordinary outcome,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizonCrossing<T = DateTime<Utc>> {
    /// The sun crosses the threshold twice, symmetric around solar noon
    Crosses {
        /// Morning crossing (sun ascending)
        rising: T,
        /// Evening crossing (sun descending)
        setting: T,
    },
    /// The sun stays above the threshold all day
    AlwaysAbove,
    /// The sun stays below the threshold all day
    AlwaysBelow,
}

impl<T> HorizonCrossing<T> {
    /// Gets the morning crossing, if the sun crosses the threshold.
    pub const fn rising(&self) -> Option<&T> {
        if let Self::Crosses { rising, .. } = self {
            Some(rising)
        } else {
            None
        }
    }

    /// Gets the evening crossing, if the sun crosses the threshold.
    pub const fn setting(&self) -> Option<&T> {
        if let Self::Crosses { setting, .. } = self {
            Some(setting)
        } else {
            None
        }
    }

    /// Checks if the sun crosses the threshold on this day.
    pub const fn crosses(&self) -> bool {
        matches!(self, Self::Crosses { .. })
    }

    /// Checks if the sun never drops below the threshold.
    pub const fn is_always_above(&self) -> bool {
        matches!(self, Self::AlwaysAbove)
    }

    /// Checks if the sun never reaches the threshold.
    pub const fn is_always_below(&self) -> bool {
        matches!(self, Self::AlwaysBelow)
    }
}

/// A span of time between two solar events, endpoints in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a window, swapping the endpoints if given in reverse.
    #[must_use]
    pub fn new(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Gets the start of the window.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Gets the end of the window.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Gets the length of the window.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Checks if `instant` lies within the window (inclusive start, exclusive end).
    #[must_use]
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.start <= *instant && *instant < self.end
    }
}

fn window(start: Option<&DateTime<Utc>>, end: Option<&DateTime<Utc>>) -> Option<TimeWindow> {
    Some(TimeWindow::new(*start?, *end?))
}

/// Named solar events for one local calendar day.
///
/// All instants are UTC. Events the sun does not reach on this day are
/// reported through [`HorizonCrossing::AlwaysAbove`] or
/// [`HorizonCrossing::AlwaysBelow`], so accessors return `None` for them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarDayTimes {
    date: NaiveDate,
    solar_noon: DateTime<Utc>,
    solar_midnight: DateTime<Utc>,
    noon_position: SunPosition,
    sunrise_sunset: HorizonCrossing,
    golden_hour: HorizonCrossing,
    blue_hour: HorizonCrossing,
    civil_twilight: HorizonCrossing,
    nautical_twilight: HorizonCrossing,
    astronomical_twilight: HorizonCrossing,
}

/// Per-threshold crossings making up a [`SolarDayTimes`].
#[derive(Debug, Clone)]
pub(crate) struct DayCrossings {
    pub(crate) sunrise_sunset: HorizonCrossing,
    pub(crate) golden_hour: HorizonCrossing,
    pub(crate) blue_hour: HorizonCrossing,
    pub(crate) civil_twilight: HorizonCrossing,
    pub(crate) nautical_twilight: HorizonCrossing,
    pub(crate) astronomical_twilight: HorizonCrossing,
}

impl SolarDayTimes {
    pub(crate) fn new(
        date: NaiveDate,
        solar_noon: DateTime<Utc>,
        solar_midnight: DateTime<Utc>,
        noon_position: SunPosition,
        crossings: DayCrossings,
    ) -> Self {
        Self {
            date,
            solar_noon,
            solar_midnight,
            noon_position,
            sunrise_sunset: crossings.sunrise_sunset,
            golden_hour: crossings.golden_hour,
            blue_hour: crossings.blue_hour,
            civil_twilight: crossings.civil_twilight,
            nautical_twilight: crossings.nautical_twilight,
            astronomical_twilight: crossings.astronomical_twilight,
        }
    }

    /// Gets the local calendar date these events belong to.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Gets solar noon (upper transit, hour angle 0°). Always defined.
    #[must_use]
    pub const fn solar_noon(&self) -> DateTime<Utc> {
        self.solar_noon
    }

    /// Gets solar midnight (lower transit), twelve hours before solar noon.
    #[must_use]
    pub const fn solar_midnight(&self) -> DateTime<Utc> {
        self.solar_midnight
    }

    /// Gets the sun's position at solar noon, its highest point of the day.
    #[must_use]
    pub const fn noon_position(&self) -> &SunPosition {
        &self.noon_position
    }

    /// Gets the sunrise/sunset crossing.
    #[must_use]
    pub const fn sunrise_sunset(&self) -> &HorizonCrossing {
        &self.sunrise_sunset
    }

    /// Gets the golden hour threshold crossing.
    #[must_use]
    pub const fn golden_hour(&self) -> &HorizonCrossing {
        &self.golden_hour
    }

    /// Gets the blue hour threshold crossing.
    #[must_use]
    pub const fn blue_hour(&self) -> &HorizonCrossing {
        &self.blue_hour
    }

    /// Gets the civil twilight crossing.
    #[must_use]
    pub const fn civil_twilight(&self) -> &HorizonCrossing {
        &self.civil_twilight
    }

    /// Gets the nautical twilight crossing.
    #[must_use]
    pub const fn nautical_twilight(&self) -> &HorizonCrossing {
        &self.nautical_twilight
    }

    /// Gets the astronomical twilight crossing.
    #[must_use]
    pub const fn astronomical_twilight(&self) -> &HorizonCrossing {
        &self.astronomical_twilight
    }

    /// Gets sunrise, if the sun rises on this day.
    #[must_use]
    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        self.sunrise_sunset.rising().copied()
    }

    /// Gets sunset, if the sun sets on this day.
    #[must_use]
    pub fn sunset(&self) -> Option<DateTime<Utc>> {
        self.sunrise_sunset.setting().copied()
    }

    /// Gets civil dawn (sun rising through -6°).
    #[must_use]
    pub fn civil_dawn(&self) -> Option<DateTime<Utc>> {
        self.civil_twilight.rising().copied()
    }

    /// Gets civil dusk (sun setting through -6°).
    #[must_use]
    pub fn civil_dusk(&self) -> Option<DateTime<Utc>> {
        self.civil_twilight.setting().copied()
    }

    /// Gets nautical dawn (sun rising through -12°).
    #[must_use]
    pub fn nautical_dawn(&self) -> Option<DateTime<Utc>> {
        self.nautical_twilight.rising().copied()
    }

    /// Gets nautical dusk (sun setting through -12°).
    #[must_use]
    pub fn nautical_dusk(&self) -> Option<DateTime<Utc>> {
        self.nautical_twilight.setting().copied()
    }

    /// Gets astronomical dawn (sun rising through -18°), the end of night.
    #[must_use]
    pub fn astronomical_dawn(&self) -> Option<DateTime<Utc>> {
        self.astronomical_twilight.rising().copied()
    }

    /// Gets astronomical dusk (sun setting through -18°), the start of night.
    #[must_use]
    pub fn astronomical_dusk(&self) -> Option<DateTime<Utc>> {
        self.astronomical_twilight.setting().copied()
    }

    /// Morning golden hour: sunrise until the sun climbs through the golden hour threshold.
    #[must_use]
    pub fn morning_golden_hour(&self) -> Option<TimeWindow> {
        window(self.sunrise_sunset.rising(), self.golden_hour.rising())
    }

    /// Evening golden hour: the sun sinking through the golden hour threshold until sunset.
    #[must_use]
    pub fn evening_golden_hour(&self) -> Option<TimeWindow> {
        window(self.golden_hour.setting(), self.sunrise_sunset.setting())
    }

    /// Morning blue hour: civil dawn until the sun climbs through the blue hour threshold.
    #[must_use]
    pub fn morning_blue_hour(&self) -> Option<TimeWindow> {
        window(self.civil_twilight.rising(), self.blue_hour.rising())
    }

    /// Evening blue hour: the sun sinking through the blue hour threshold until civil dusk.
    #[must_use]
    pub fn evening_blue_hour(&self) -> Option<TimeWindow> {
        window(self.blue_hour.setting(), self.civil_twilight.setting())
    }

    /// Time between sunrise and sunset; 24 h in polar day, zero in polar night.
    #[must_use]
    pub fn day_length(&self) -> TimeDelta {
        match &self.sunrise_sunset {
            HorizonCrossing::Crosses { rising, setting } => *setting - *rising,
            HorizonCrossing::AlwaysAbove => TimeDelta::hours(24),
            HorizonCrossing::AlwaysBelow => TimeDelta::zero(),
        }
    }

    /// Checks if the sun stays above the horizon all day.
    #[must_use]
    pub const fn is_polar_day(&self) -> bool {
        self.sunrise_sunset.is_always_above()
    }

    /// Checks if the sun stays below the horizon all day.
    #[must_use]
    pub const fn is_polar_night(&self) -> bool {
        self.sunrise_sunset.is_always_below()
    }
}

/// One point of a sun path: an instant and the sun's position at it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPathSample {
    timestamp: DateTime<Utc>,
    position: SunPosition,
}

impl SunPathSample {
    pub(crate) const fn new(timestamp: DateTime<Utc>, position: SunPosition) -> Self {
        Self {
            timestamp,
            position,
        }
    }

    /// Gets the sample instant.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Gets the sun's position at the sample instant.
    #[must_use]
    pub const fn position(&self) -> &SunPosition {
        &self.position
    }
}

/// Sampling and filtering options for sun paths.
///
/// The default samples every 10 minutes and keeps every sample, giving 144
/// points per day. Filtering is opt-in through [`SunPathOptions::only_above`].
///
/// # Example
/// ```
/// # use sun_ephemeris::SunPathOptions;
/// let options = SunPathOptions::new(15).unwrap();
/// assert_eq!(options.sample_count(), 96);
///
/// // Keep only the visible arc
/// let visible = options.only_above(0.0).unwrap();
/// assert!(!visible.include_below_horizon());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPathOptions {
    pub(crate) interval_minutes: u32,
    pub(crate) include_below_horizon: bool,
    pub(crate) horizon_threshold: f64,
}

impl Default for SunPathOptions {
    fn default() -> Self {
        Self {
            interval_minutes: 10,
            include_below_horizon: true,
            horizon_threshold: Horizon::AstronomicalTwilight.elevation_angle(),
        }
    }
}

impl SunPathOptions {
    /// Creates options with the given sampling interval, keeping every sample.
    ///
    /// # Errors
    /// Returns `InvalidSampleInterval` unless `interval_minutes` is between 1 and 120.
    pub fn new(interval_minutes: u32) -> Result<Self> {
        check_sample_interval(interval_minutes)?;
        Ok(Self {
            interval_minutes,
            ..Self::default()
        })
    }

    /// Keeps only samples whose elevation is strictly above `threshold_degrees`.
    ///
    /// Use -18 to keep everything through astronomical twilight, 0 for the visible arc.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if the threshold is outside -90 to +90 degrees.
    pub fn only_above(self, threshold_degrees: f64) -> Result<Self> {
        check_elevation_angle(threshold_degrees)?;
        Ok(Self {
            include_below_horizon: false,
            horizon_threshold: threshold_degrees,
            ..self
        })
    }

    /// Turns filtering off again, keeping every sample.
    #[must_use]
    pub const fn including_below_horizon(self) -> Self {
        Self {
            include_below_horizon: true,
            ..self
        }
    }

    /// Gets the sampling interval in minutes.
    #[must_use]
    pub const fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    /// Checks whether samples below the threshold are kept.
    #[must_use]
    pub const fn include_below_horizon(&self) -> bool {
        self.include_below_horizon
    }

    /// Gets the elevation threshold applied when filtering.
    #[must_use]
    pub const fn horizon_threshold(&self) -> f64 {
        self.horizon_threshold
    }

    /// Number of samples in an unfiltered path: whole intervals in 24 hours.
    #[must_use]
    pub const fn sample_count(&self) -> u32 {
        if self.interval_minutes == 0 {
            return 0;
        }
        MINUTES_PER_DAY / self.interval_minutes
    }

    pub(crate) fn keeps(&self, position: &SunPosition) -> bool {
        self.include_below_horizon || position.elevation() > self.horizon_threshold
    }
}

/// Thresholds used when computing [`SolarDayTimes`].
///
/// Defaults: sunrise/sunset at 0°, golden hour up to +6°, blue hour from -6° to -4°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayTimesOptions {
    sunrise_sunset: Horizon,
    golden_hour: Horizon,
    blue_hour: Horizon,
}

impl Default for DayTimesOptions {
    fn default() -> Self {
        Self {
            sunrise_sunset: Horizon::SunriseSunset,
            golden_hour: Horizon::GoldenHour,
            blue_hour: Horizon::BlueHour,
        }
    }
}

impl DayTimesOptions {
    /// Replaces the sunrise/sunset threshold (e.g. `Horizon::custom(-0.833)` for apparent sunrise).
    #[must_use]
    pub const fn with_sunrise_sunset(self, horizon: Horizon) -> Self {
        Self {
            sunrise_sunset: horizon,
            ..self
        }
    }

    /// Replaces the upper edge of the golden hour band.
    #[must_use]
    pub const fn with_golden_hour(self, horizon: Horizon) -> Self {
        Self {
            golden_hour: horizon,
            ..self
        }
    }

    /// Replaces the upper edge of the blue hour band.
    #[must_use]
    pub const fn with_blue_hour(self, horizon: Horizon) -> Self {
        Self {
            blue_hour: horizon,
            ..self
        }
    }

    /// Gets the sunrise/sunset threshold.
    #[must_use]
    pub const fn sunrise_sunset(&self) -> Horizon {
        self.sunrise_sunset
    }

    /// Gets the golden hour threshold.
    #[must_use]
    pub const fn golden_hour(&self) -> Horizon {
        self.golden_hour
    }

    /// Gets the blue hour threshold.
    #[must_use]
    pub const fn blue_hour(&self) -> Horizon {
        self.blue_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse::<DateTime<Utc>>().unwrap()
    }

    #[test]
    fn test_horizon_elevation_angles() {
        assert_eq!(Horizon::SunriseSunset.elevation_angle(), 0.0);
        assert_eq!(Horizon::GoldenHour.elevation_angle(), 6.0);
        assert_eq!(Horizon::BlueHour.elevation_angle(), -4.0);
        assert_eq!(Horizon::CivilTwilight.elevation_angle(), -6.0);
        assert_eq!(Horizon::NauticalTwilight.elevation_angle(), -12.0);
        assert_eq!(Horizon::AstronomicalTwilight.elevation_angle(), -18.0);

        let custom = Horizon::custom(-3.0).unwrap();
        assert_eq!(custom.elevation_angle(), -3.0);

        assert!(Horizon::custom(-95.0).is_err());
        assert!(Horizon::custom(95.0).is_err());
        assert!(Horizon::Custom(f64::NAN).checked_elevation_angle().is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_horizon_hash_normalizes_zero_sign() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Horizon::Custom(0.0));
        set.insert(Horizon::Custom(-0.0));

        assert_eq!(set.len(), 1, "hashing should treat +0.0 and -0.0 equally");
    }

    #[test]
    fn test_horizon_equality_is_reflexive() {
        let nan = Horizon::Custom(f64::NAN);
        assert_eq!(nan, nan);
        assert_ne!(nan, Horizon::Custom(0.0));

        assert_eq!(Horizon::Custom(-0.0), Horizon::Custom(0.0));
        assert_eq!(Horizon::Custom(6.0), Horizon::Custom(6.0));
        assert_ne!(Horizon::Custom(6.0), Horizon::GoldenHour);
        assert_ne!(Horizon::Custom(0.0), Horizon::SunriseSunset);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(GeoCoordinate::new(90.0, -180.0).is_ok());
        assert_eq!(
            GeoCoordinate::new(95.0, 0.0).unwrap_err().field(),
            crate::InputField::Latitude
        );
        assert_eq!(
            GeoCoordinate::new(0.0, 180.5).unwrap_err().field(),
            crate::InputField::Longitude
        );

        let tampered = GeoCoordinate {
            latitude: f64::NAN,
            longitude: 0.0,
        };
        assert!(tampered.validate().is_err());
    }

    #[test]
    fn test_sun_position_normalizes() {
        let position = SunPosition::from_parts(-90.0, 45.0, 10.0, -30.0);
        assert_eq!(position.azimuth(), 270.0);
        assert_eq!(position.zenith_angle(), 45.0);
        assert!(position.is_sun_up());
        assert!(!position.is_sun_down());

        let on_horizon = SunPosition::from_parts(180.0, 0.0, 0.0, 0.0);
        assert!(on_horizon.is_sun_down());
    }

    #[test]
    fn test_shadow_helpers() {
        let position = SunPosition::from_parts(135.0, 45.0, 0.0, 0.0);
        let shadow = position.shadow_length(10.0).unwrap();
        assert!((shadow - 10.0).abs() < 1e-9);
        assert_eq!(position.shadow_azimuth(), 315.0);

        let night = SunPosition::from_parts(0.0, -5.0, 0.0, 180.0);
        assert_eq!(night.shadow_length(10.0), None);
    }

    #[test]
    fn test_horizon_crossing_accessors() {
        let rising = utc("2024-06-21T05:30:00Z");
        let setting = utc("2024-06-21T18:30:00Z");
        let crossing = HorizonCrossing::Crosses { rising, setting };

        assert!(crossing.crosses());
        assert_eq!(crossing.rising(), Some(&rising));
        assert_eq!(crossing.setting(), Some(&setting));

        let above: HorizonCrossing = HorizonCrossing::AlwaysAbove;
        assert!(above.is_always_above());
        assert_eq!(above.rising(), None);

        let below: HorizonCrossing = HorizonCrossing::AlwaysBelow;
        assert!(below.is_always_below());
        assert_eq!(below.setting(), None);
    }

    #[test]
    fn test_time_window_orders_endpoints() {
        let early = utc("2024-06-21T05:00:00Z");
        let late = utc("2024-06-21T06:00:00Z");
        let window = TimeWindow::new(late, early);
        assert_eq!(window.start(), early);
        assert_eq!(window.end(), late);
        assert_eq!(window.duration(), TimeDelta::hours(1));
        assert!(window.contains(&early));
        assert!(!window.contains(&late));
    }

    fn sample_day(sunrise_sunset: HorizonCrossing) -> SolarDayTimes {
        let noon = utc("2024-06-21T12:00:00Z");
        let crossings = DayCrossings {
            sunrise_sunset,
            golden_hour: HorizonCrossing::Crosses {
                rising: utc("2024-06-21T06:30:00Z"),
                setting: utc("2024-06-21T17:30:00Z"),
            },
            blue_hour: HorizonCrossing::Crosses {
                rising: utc("2024-06-21T05:40:00Z"),
                setting: utc("2024-06-21T18:20:00Z"),
            },
            civil_twilight: HorizonCrossing::Crosses {
                rising: utc("2024-06-21T05:30:00Z"),
                setting: utc("2024-06-21T18:30:00Z"),
            },
            nautical_twilight: HorizonCrossing::AlwaysBelow,
            astronomical_twilight: HorizonCrossing::AlwaysBelow,
        };
        SolarDayTimes::new(
            NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(),
            noon,
            noon - TimeDelta::hours(12),
            SunPosition::from_parts(180.0, 60.0, 23.4, 0.0),
            crossings,
        )
    }

    #[test]
    fn test_day_times_windows() {
        let day = sample_day(HorizonCrossing::Crosses {
            rising: utc("2024-06-21T06:00:00Z"),
            setting: utc("2024-06-21T18:00:00Z"),
        });

        assert_eq!(day.day_length(), TimeDelta::hours(12));
        let golden = day.morning_golden_hour().unwrap();
        assert_eq!(golden.start(), utc("2024-06-21T06:00:00Z"));
        assert_eq!(golden.end(), utc("2024-06-21T06:30:00Z"));
        let blue = day.evening_blue_hour().unwrap();
        assert_eq!(blue.duration(), TimeDelta::minutes(10));
        assert_eq!(day.nautical_dawn(), None);
        assert!(!day.is_polar_day());
    }

    #[test]
    fn test_day_length_in_polar_cases() {
        let polar_day = sample_day(HorizonCrossing::AlwaysAbove);
        assert!(polar_day.is_polar_day());
        assert_eq!(polar_day.day_length(), TimeDelta::hours(24));
        assert_eq!(polar_day.sunrise(), None);
        assert_eq!(polar_day.morning_golden_hour(), None);

        let polar_night = sample_day(HorizonCrossing::AlwaysBelow);
        assert!(polar_night.is_polar_night());
        assert_eq!(polar_night.day_length(), TimeDelta::zero());
    }

    #[test]
    fn test_sun_path_options() {
        let defaults = SunPathOptions::default();
        assert_eq!(defaults.interval_minutes(), 10);
        assert_eq!(defaults.sample_count(), 144);
        assert!(defaults.include_below_horizon());
        assert_eq!(defaults.horizon_threshold(), -18.0);

        assert_eq!(SunPathOptions::new(15).unwrap().sample_count(), 96);
        assert_eq!(SunPathOptions::new(7).unwrap().sample_count(), 205);
        assert!(SunPathOptions::new(0).is_err());
        assert!(SunPathOptions::new(121).is_err());
        assert!(defaults.only_above(f64::NAN).is_err());

        let visible = defaults.only_above(0.0).unwrap();
        let below = SunPosition::from_parts(0.0, -1.0, 0.0, 180.0);
        let above = SunPosition::from_parts(90.0, 1.0, 0.0, -90.0);
        assert!(!visible.keeps(&below));
        assert!(visible.keeps(&above));
        assert!(visible.including_below_horizon().keeps(&below));
    }

    #[test]
    fn test_day_times_options() {
        let options = DayTimesOptions::default()
            .with_sunrise_sunset(Horizon::custom(-0.833).unwrap())
            .with_golden_hour(Horizon::custom(10.0).unwrap());
        assert_eq!(options.sunrise_sunset().elevation_angle(), -0.833);
        assert_eq!(options.golden_hour().elevation_angle(), 10.0);
        assert_eq!(options.blue_hour(), Horizon::BlueHour);
    }
}
