//! Daily sun report (twilight, golden hour, blue hour) for cities across the globe.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use sun_ephemeris::{GeoCoordinate, HorizonCrossing, SolarDayTimes, ephemeris};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    tz: Tz,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            tz: chrono_tz::Arctic::Longyearbyen,
        },
        City {
            name: "New York, USA",
            latitude: 40.7128,
            longitude: -74.0060,
            tz: chrono_tz::America::New_York,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            tz: chrono_tz::Pacific::Auckland,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            tz: chrono_tz::Asia::Singapore,
        },
    ];

    let date = NaiveDate::from_ymd_opt(2024, 6, 21).ok_or("invalid date")?;

    for city in &cities {
        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E ({})",
            city.latitude, city.longitude, city.tz
        );
        println!("Date: {date}");
        println!();

        let coordinate = GeoCoordinate::new(city.latitude, city.longitude)?;
        let times = ephemeris::day_times(coordinate, date, &city.tz)?;
        print_report(&times, &city.tz);
        println!();
    }

    Ok(())
}

fn print_report(times: &SolarDayTimes, tz: &Tz) {
    let local = |instant: DateTime<Utc>| instant.with_timezone(tz).format("%H:%M:%S");

    println!(
        "Solar noon: {} (elevation {:.1}°)",
        local(times.solar_noon()),
        times.noon_position().elevation()
    );
    println!("Solar midnight: {}", local(times.solar_midnight()));
    println!("Day length: {} min", times.day_length().num_minutes());

    let crossings = [
        ("Sunrise/Sunset", times.sunrise_sunset()),
        ("Civil Twilight", times.civil_twilight()),
        ("Nautical Twilight", times.nautical_twilight()),
        ("Astronomical Twilight", times.astronomical_twilight()),
    ];
    for (label, crossing) in crossings {
        match crossing {
            HorizonCrossing::Crosses { rising, setting } => {
                println!("{label}: {} - {}", local(*rising), local(*setting));
            }
            HorizonCrossing::AlwaysAbove => println!("{label}: sun stays above all day"),
            HorizonCrossing::AlwaysBelow => println!("{label}: sun stays below all day"),
        }
    }

    let windows = [
        ("Morning blue hour", times.morning_blue_hour()),
        ("Morning golden hour", times.morning_golden_hour()),
        ("Evening golden hour", times.evening_golden_hour()),
        ("Evening blue hour", times.evening_blue_hour()),
    ];
    for (label, window) in windows {
        if let Some(window) = window {
            println!(
                "{label}: {} - {} ({} min)",
                local(window.start()),
                local(window.end()),
                window.duration().num_minutes()
            );
        } else {
            println!("{label}: none");
        }
    }
}
