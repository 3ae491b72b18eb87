//! # Sun Ephemeris
//!
//! Low-precision solar ephemeris for outdoor planning: where the sun is, when it
//! rises and sets, and which arc it traces across the sky.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The library answers three questions for an observer at a latitude/longitude:
//! - **Position**: azimuth, elevation and declination of the sun at an instant
//! - **Day times**: solar noon, solar midnight, sunrise/sunset, civil, nautical
//!   and astronomical twilight, golden hour and blue hour for a local calendar day
//! - **Sun path**: the sun's position sampled at a fixed interval across a local day
//!
//! Accuracy is about 0.01° in position and within a couple of minutes for
//! rise/set times, good for photography planning, shade studies and map
//! overlays. It is not meant for navigation or astronomy.
//!
//! ## Features
//!
//! - Pure and stateless: every call is deterministic and thread-safe
//! - Polar day and polar night are ordinary results, never errors
//! - Any `chrono` time zone for input; all output instants are UTC
//! - `std` or `no_std` + `alloc`, math via native or `libm`
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for all value types
//!
//! **Configuration examples:**
//! ```toml
//! # Default
//! sun-ephemeris = "0.1"
//!
//! # no_std (needs an allocator for sun paths)
//! sun-ephemeris = { version = "0.1", default-features = false, features = ["libm"] }
//!
//! # Serializable results for a web API
//! sun-ephemeris = { version = "0.1", features = ["serde"] }
//! ```
//!
//! ## References
//!
//! - U.S. Naval Observatory / HM Nautical Almanac Office. *The Astronomical Almanac*,
//!   section C: "Low precision formulas for the Sun".
//! - Meeus, J. (1998). *Astronomical Algorithms*, 2nd ed. Willmann-Bell. Chapters 7, 12 and 15.
//!
//! ## Quick Start
//!
//! ### Solar Position
//! ```rust
//! use chrono::{DateTime, FixedOffset};
//! use sun_ephemeris::{ephemeris, GeoCoordinate};
//!
//! // Sun position for Vienna at noon local time
//! let vienna = GeoCoordinate::new(48.21, 16.37).unwrap();
//! let datetime = "2026-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let position = ephemeris::sun_position(vienna, &datetime).unwrap();
//!
//! println!("Azimuth: {:.3}°", position.azimuth());
//! println!("Elevation: {:.3}°", position.elevation());
//! ```
//!
//! ### Solar Position (numeric API)
//! ```rust
//! use sun_ephemeris::{ephemeris, time::JulianDate, GeoCoordinate};
//!
//! let jd = JulianDate::from_utc(2026, 6, 21, 10, 0, 0.0).unwrap();
//! let vienna = GeoCoordinate::new(48.21, 16.37).unwrap();
//! let position = ephemeris::sun_position_from_julian(vienna, jd).unwrap();
//!
//! println!("Azimuth: {:.3}°", position.azimuth());
//! ```
//!
//! ### Sunrise, Sunset and Golden Hour
//! ```rust
//! use chrono::{FixedOffset, NaiveDate};
//! use sun_ephemeris::{ephemeris, GeoCoordinate, HorizonCrossing};
//!
//! let san_francisco = GeoCoordinate::new(37.7749, -122.4194).unwrap();
//! let pdt = FixedOffset::west_opt(7 * 3600).unwrap();
//! let date = NaiveDate::from_ymd_opt(2026, 6, 21).unwrap();
//!
//! let times = ephemeris::day_times(san_francisco, date, &pdt).unwrap();
//! match times.sunrise_sunset() {
//!     HorizonCrossing::Crosses { rising, setting } => {
//!         println!("Sunrise: {}", rising.with_timezone(&pdt));
//!         println!("Solar noon: {}", times.solar_noon().with_timezone(&pdt));
//!         println!("Sunset: {}", setting.with_timezone(&pdt));
//!     }
//!     _ => println!("No sunrise/sunset (polar day/night)"),
//! }
//! if let Some(golden) = times.evening_golden_hour() {
//!     println!("Evening golden hour: {} min", golden.duration().num_minutes());
//! }
//! ```
//!
//! ### Sun Path
//! ```rust
//! use chrono::{NaiveDate, Utc};
//! use sun_ephemeris::{ephemeris, GeoCoordinate, SunPathOptions};
//!
//! let reykjavik = GeoCoordinate::new(64.1466, -21.9426).unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
//! let options = SunPathOptions::new(30).unwrap().only_above(0.0).unwrap();
//!
//! for sample in ephemeris::sun_path(reykjavik, date, &Utc, &options).unwrap() {
//!     println!("{} {:.1}°", sample.timestamp(), sample.position().elevation());
//! }
//! ```
//!
//! ## Model
//!
//! Mean longitude and mean anomaly of the sun grow linearly from J2000.0; two
//! equation-of-center terms give the ecliptic longitude, a fixed 23.439° tilt
//! gives right ascension and declination, and Greenwich mean sidereal time
//! plus the observer's longitude gives the hour angle. No refraction, no ΔT,
//! no parallax: thresholds refer to the geometric centre of the solar disc.
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Zenith angle**: 0° = directly overhead (zenith), 90° = horizon (0° to 180°)
//! - **Elevation angle**: 0° = horizon, 90° = directly overhead (-90° to +90°)

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

extern crate alloc;

// Public API exports
pub use crate::error::{Error, InputField, Result};
pub use crate::types::{
    DayTimesOptions, GeoCoordinate, Horizon, HorizonCrossing, SolarDayTimes, SunPathOptions,
    SunPathSample, SunPosition, TimeWindow,
};

// Algorithm module
pub mod ephemeris;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
