//! Validation against reference data computed with the independent NOAA solar calculator algorithm.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use sun_ephemeris::{GeoCoordinate, ephemeris};

const POSITION_TOLERANCE: f64 = 0.05; // degrees
const EVENT_TOLERANCE_SECONDS: i64 = 120;

#[derive(Debug)]
struct PositionRecord {
    datetime: DateTime<Utc>,
    coordinate: GeoCoordinate,
    azimuth: f64,
    elevation: f64,
}

impl PositionRecord {
    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            datetime: record[0].parse()?,
            coordinate: GeoCoordinate::new(record[1].parse()?, record[2].parse()?)?,
            azimuth: record[3].parse()?,
            elevation: record[4].parse()?,
        })
    }
}

#[derive(Debug)]
struct SunriseRecord {
    date: NaiveDate,
    offset: FixedOffset,
    coordinate: GeoCoordinate,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

impl SunriseRecord {
    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            date: record[0].parse()?,
            offset: record[1].parse()?,
            coordinate: GeoCoordinate::new(record[2].parse()?, record[3].parse()?)?,
            sunrise: record[4].parse()?,
            sunset: record[5].parse()?,
        })
    }
}

fn read_records<T>(
    path: &str,
    parse: fn(&csv::StringRecord) -> Result<T, Box<dyn Error>>,
) -> Result<Vec<T>, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .from_reader(File::open(path)?);
    reader.records().map(|record| parse(&record?)).collect()
}

/// Smallest difference between two bearings, in degrees.
fn azimuth_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    diff.min(360.0 - diff)
}

#[test]
fn validate_positions_against_noaa_reference() -> Result<(), Box<dyn Error>> {
    let records = read_records(
        "tests/data/noaa_reference_positions.csv",
        PositionRecord::from_csv_record,
    )?;
    assert_eq!(records.len(), 16);

    let mut max_azimuth_error = 0.0_f64;
    let mut max_elevation_error = 0.0_f64;

    for record in &records {
        let position = ephemeris::sun_position(record.coordinate, &record.datetime)?;

        let azimuth_error = azimuth_difference(position.azimuth(), record.azimuth);
        let elevation_error = (position.elevation() - record.elevation).abs();
        max_azimuth_error = max_azimuth_error.max(azimuth_error);
        max_elevation_error = max_elevation_error.max(elevation_error);

        assert!(
            azimuth_error < POSITION_TOLERANCE,
            "Azimuth error {azimuth_error:.4}° for {record:?}: got {:.4}°",
            position.azimuth()
        );
        assert!(
            elevation_error < POSITION_TOLERANCE,
            "Elevation error {elevation_error:.4}° for {record:?}: got {:.4}°",
            position.elevation()
        );
    }

    println!(
        "{} positions, max azimuth error {max_azimuth_error:.4}°, max elevation error {max_elevation_error:.4}°",
        records.len()
    );
    Ok(())
}

#[test]
fn validate_sunrise_sunset_against_noaa_reference() -> Result<(), Box<dyn Error>> {
    let records = read_records(
        "tests/data/geometric_sunrise_sunset.csv",
        SunriseRecord::from_csv_record,
    )?;
    assert_eq!(records.len(), 10);

    for record in &records {
        let times = ephemeris::day_times(record.coordinate, record.date, &record.offset)?;

        let sunrise = times.sunrise().ok_or("expected a sunrise")?;
        let sunset = times.sunset().ok_or("expected a sunset")?;
        let sunrise_error = (sunrise - record.sunrise).num_seconds().abs();
        let sunset_error = (sunset - record.sunset).num_seconds().abs();

        assert!(
            sunrise_error <= EVENT_TOLERANCE_SECONDS,
            "Sunrise off by {sunrise_error}s for {record:?}: got {sunrise}"
        );
        assert!(
            sunset_error <= EVENT_TOLERANCE_SECONDS,
            "Sunset off by {sunset_error}s for {record:?}: got {sunset}"
        );
    }
    Ok(())
}

#[test]
fn horizon_crossing_matches_day_times() -> Result<(), Box<dyn Error>> {
    let records = read_records(
        "tests/data/geometric_sunrise_sunset.csv",
        SunriseRecord::from_csv_record,
    )?;

    for record in &records {
        let times = ephemeris::day_times(record.coordinate, record.date, &record.offset)?;
        let crossing = ephemeris::horizon_crossing(
            record.coordinate,
            record.date,
            &record.offset,
            sun_ephemeris::Horizon::SunriseSunset,
        )?;
        assert_eq!(&crossing, times.sunrise_sunset());
    }
    Ok(())
}
