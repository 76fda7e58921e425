//! Basic sun position calculation example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use entropedia_sun::{GeoCoordinate, sun};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Calculate sun position using FixedOffset timezone
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;

    // Example 2: Same time using UTC
    let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap(); // 19:00 UTC = 12:00 PDT

    // San Francisco, validated up front
    let location = GeoCoordinate::new(37.7749, -122.4194)?;

    let position_fixed =
        sun::solar_position(datetime_fixed, location.latitude(), location.longitude());
    let position_utc = sun::solar_position(datetime_utc, location.latitude(), location.longitude());

    println!("Sun position for San Francisco on June 21, 2023 at noon Pacific Time:");
    println!("Using FixedOffset timezone:");
    println!("  Azimuth: {:.3}°", position_fixed.azimuth_degrees());
    println!("  Altitude: {:.3}°", position_fixed.altitude_degrees());
    println!("  Zenith angle: {:.3} rad", position_fixed.zenith_angle());

    println!("\nUsing UTC timezone (same moment):");
    println!("  Azimuth: {:.3}°", position_utc.azimuth_degrees());
    println!("  Altitude: {:.3}°", position_utc.altitude_degrees());

    println!(
        "\nBoth calculations produce identical results: {}",
        position_fixed == position_utc
    );

    // Reuse the time-dependent part across several locations
    let parts = sun::time_dependent_parts_for(&datetime_utc);
    println!(
        "\nDeclination {:.3}°, right ascension {:.3}°",
        parts.declination().to_degrees(),
        parts.right_ascension().to_degrees()
    );
    for (name, latitude, longitude) in [
        ("Reykjavik", 64.1466, -21.9426),
        ("Nairobi", -1.2921, 36.8219),
        ("Tokyo", 35.6762, 139.6503),
    ] {
        let position = sun::solar_position_with_time_dependent_parts(latitude, longitude, &parts);
        println!(
            "  {name}: azimuth {:.2}°, altitude {:.2}°",
            position.azimuth_degrees(),
            position.altitude_degrees()
        );
    }

    if position_fixed.is_sun_up() {
        println!("\nSun is above the horizon in San Francisco");
    } else {
        println!("\nSun is below the horizon in San Francisco");
    }

    Ok(())
}
