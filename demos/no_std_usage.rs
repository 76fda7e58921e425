//! Sun position from plain numbers, without chrono.
//!
//! Build with `--no-default-features --features libm` to use the same code path as a
//! `no_std` target. Add `chrono` to the features to also step the sun driver.

use entropedia_sun::{sun, time::UtcInstant};

fn main() -> Result<(), entropedia_sun::Error> {
    // 2024-06-21 10:00 UTC
    let instant = UtcInstant::from_utc(2024, 6, 21, 10, 0, 0.0)?;

    println!(
        "Days since J2000: {:.2}, within validity window: {}",
        instant.days_since_j2000(),
        instant.is_within_validity_window()
    );

    let position = sun::solar_position_from_instant(instant, 48.21, 16.37);
    println!("Vienna:");
    println!("  Azimuth: {:.3}°", position.azimuth_degrees());
    println!("  Altitude: {:.3}°", position.altitude_degrees());

    let parts = sun::time_dependent_parts(instant);
    println!("Same instant along the equator:");
    for longitude in [-120.0, -60.0, 0.0, 60.0, 120.0, 180.0] {
        let position = sun::solar_position_with_time_dependent_parts(0.0, longitude, &parts);
        println!(
            "  {longitude:>6.1}°: azimuth {:7.3}°, altitude {:7.3}°",
            position.azimuth_degrees(),
            position.altitude_degrees()
        );
    }

    // Invalid input is reported instead of silently wrapped
    match UtcInstant::from_utc(2024, 2, 30, 0, 0, 0.0) {
        Ok(_) => println!("February 30th accepted?"),
        Err(e) => println!("Rejected: {e}"),
    }

    #[cfg(feature = "chrono")]
    drive_one_hour()?;

    Ok(())
}

#[cfg(feature = "chrono")]
fn drive_one_hour() -> Result<(), entropedia_sun::Error> {
    use chrono::{FixedOffset, NaiveDate, TimeZone};
    use entropedia_sun::driver::{SunDriver, SunDriverConfig};

    let invalid_start = entropedia_sun::Error::invalid_datetime("start time is out of range");
    let start = NaiveDate::from_ymd_opt(2024, 6, 21)
        .and_then(|date| date.and_hms_opt(5, 0, 0))
        .and_then(|local| {
            FixedOffset::east_opt(2 * 3600)?
                .from_local_datetime(&local)
                .single()
        })
        .ok_or(invalid_start)?;

    let config = SunDriverConfig {
        latitude: 48.21,
        longitude: 16.37,
        time_speed: 60.0,
        frame_steps: 10,
    };
    let mut driver = SunDriver::new(config, start)?;

    println!("Vienna sunrise, one simulated hour at 60x:");
    for _ in 0..60 {
        if let Some(light) = driver.update(1.0) {
            println!(
                "  {} pitch {:6.2}°, intensity {:.2}",
                driver.time().format("%H:%M"),
                light.pitch_degrees(),
                light.intensity()
            );
        }
    }

    Ok(())
}
