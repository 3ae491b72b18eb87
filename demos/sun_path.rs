//! Sun path over a day: azimuth/elevation table and a crude elevation chart.
//!
//! Usage: `cargo run --example sun_path -- [latitude] [longitude] [YYYY-MM-DD] [interval_minutes]`

use chrono::{NaiveDate, Utc};
use sun_ephemeris::{GeoCoordinate, SunPathOptions, ephemeris};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let latitude: f64 = args.first().map_or(Ok(48.21), |s| s.parse())?;
    let longitude: f64 = args.get(1).map_or(Ok(16.37), |s| s.parse())?;
    let date = match args.get(2) {
        Some(s) => s.parse::<NaiveDate>()?,
        None => NaiveDate::from_ymd_opt(2026, 6, 21).ok_or("invalid date")?,
    };
    let interval: u32 = args.get(3).map_or(Ok(30), |s| s.parse())?;

    let coordinate = GeoCoordinate::new(latitude, longitude)?;
    let options = SunPathOptions::new(interval)?.only_above(-18.0)?;
    let path = ephemeris::sun_path(coordinate, date, &Utc, &options)?;

    println!("Sun path for {latitude:.4}, {longitude:.4} on {date} (UTC day, every {interval} min)");
    println!("{} samples through astronomical twilight", path.len());
    println!();
    println!("{:>8} {:>9} {:>9}  elevation", "UTC", "azimuth", "elev.");

    for sample in &path {
        let position = sample.position();
        let bar_length = if position.is_sun_up() {
            (position.elevation() / 2.0).round() as usize
        } else {
            0
        };
        println!(
            "{:>8} {:>8.2}° {:>8.2}°  {}",
            sample.timestamp().format("%H:%M"),
            position.azimuth(),
            position.elevation(),
            "#".repeat(bar_length)
        );
    }

    Ok(())
}
