//! Error types for the solar ephemeris library.
//!
//! Every error is an invalid-input error raised at the boundary of a public
//! operation. Polar day and polar night are results, never errors.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// The argument an [`Error`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// Observer latitude.
    Latitude,
    /// Observer longitude.
    Longitude,
    /// Instant of observation.
    Timestamp,
    /// Sun path sampling interval.
    SampleInterval,
    /// Elevation threshold of a horizon definition.
    ElevationAngle,
    /// Calendar date or time-of-day components.
    DateTime,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Timestamp => "timestamp",
            Self::SampleInterval => "sample interval",
            Self::ElevationAngle => "elevation angle",
            Self::DateTime => "date/time",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when calling the ephemeris operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be finite and between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be finite and between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Non-finite time value (Julian day or Unix seconds).
    InvalidTimestamp {
        /// The invalid time value provided.
        value: f64,
    },
    /// Sun path sampling interval outside 1 to 120 minutes.
    InvalidSampleInterval {
        /// The invalid interval, in minutes.
        minutes: u32,
    },
    /// Invalid elevation angle for a horizon or path threshold.
    InvalidElevationAngle {
        /// The invalid elevation angle value provided.
        value: f64,
    },
    /// Invalid calendar components, or an instant chrono cannot represent.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidTimestamp { value } => {
                write!(f, "invalid timestamp {value} (must be finite)")
            }
            Self::InvalidSampleInterval { minutes } => {
                write!(
                    f,
                    "invalid sample interval {minutes} min (must be between 1 and 120 minutes)"
                )
            }
            Self::InvalidElevationAngle { value } => {
                write!(
                    f,
                    "invalid elevation angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid timestamp error.
    #[must_use]
    pub const fn invalid_timestamp(value: f64) -> Self {
        Self::InvalidTimestamp { value }
    }

    /// Creates an invalid sample interval error.
    #[must_use]
    pub const fn invalid_sample_interval(minutes: u32) -> Self {
        Self::InvalidSampleInterval { minutes }
    }

    /// Creates an invalid elevation angle error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Names the argument that failed validation.
    #[must_use]
    pub const fn field(&self) -> InputField {
        match self {
            Self::InvalidLatitude { .. } => InputField::Latitude,
            Self::InvalidLongitude { .. } => InputField::Longitude,
            Self::InvalidTimestamp { .. } => InputField::Timestamp,
            Self::InvalidSampleInterval { .. } => InputField::SampleInterval,
            Self::InvalidElevationAngle { .. } => InputField::ElevationAngle,
            Self::InvalidDateTime { .. } => InputField::DateTime,
        }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees or not finite.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        log::debug!("rejecting latitude {latitude}");
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees or not finite.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        log::debug!("rejecting longitude {longitude}");
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a raw time value (Julian day, Unix seconds) is finite.
///
/// # Errors
/// Returns `InvalidTimestamp` for NaN or infinite values.
pub fn check_timestamp(value: f64) -> Result<()> {
    if !value.is_finite() {
        log::debug!("rejecting non-finite timestamp {value}");
        return Err(Error::invalid_timestamp(value));
    }
    Ok(())
}

/// Validates a sun path sampling interval (1 to 120 minutes).
///
/// # Errors
/// Returns `InvalidSampleInterval` for zero or intervals longer than two hours.
pub fn check_sample_interval(minutes: u32) -> Result<()> {
    if !(1..=120).contains(&minutes) {
        log::debug!("rejecting sample interval {minutes} min");
        return Err(Error::invalid_sample_interval(minutes));
    }
    Ok(())
}

/// Validates an elevation angle (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidElevationAngle` if the angle is outside -90 to +90 degrees or not finite.
pub fn check_elevation_angle(elevation: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&elevation) {
        log::debug!("rejecting elevation angle {elevation}");
        return Err(Error::invalid_elevation_angle(elevation));
    }
    Ok(())
}
