//! Runs a simulated day through the sun driver and prints the light every hour.
//!
//! Set `RUST_LOG=debug` (or `trace` for every emitted light) to see the driver's log.

use chrono::{DateTime, FixedOffset, Timelike};
use entropedia_sun::driver::{SunDriver, SunDriverConfig};
use entropedia_sun::time::two_digit_labels;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let start = "2024-06-21T00:00:00+02:00".parse::<DateTime<FixedOffset>>()?;
    let config = SunDriverConfig {
        latitude: 48.21,
        longitude: 16.37,
        // One simulated minute per frame at 60 fps
        time_speed: 3600.0,
        frame_steps: 60,
    };
    let mut driver = SunDriver::new(config, start)?;

    let hours = two_digit_labels(24, 0);
    let minutes = two_digit_labels(60, 0);
    println!("Time picker: {} hours, {} minutes", hours.len(), minutes.len());

    println!("Vienna, midsummer:");
    for _ in 0..24 {
        // One simulated hour, only its first frame emits a light
        for _ in 0..60 {
            if let Some(light) = driver.update(1.0 / 60.0) {
                let time = driver.time();
                println!(
                    "  {}:{} pitch {:6.2}°, yaw {:6.2}°, intensity {:.2}",
                    hours[time.hour() as usize],
                    minutes[time.minute() as usize],
                    light.pitch_degrees(),
                    light.yaw_degrees(),
                    light.intensity()
                );
            }
        }
    }

    driver.set_time(21, 30)?;
    let dusk = driver.current_light();
    println!("Dusk at {}: intensity {:.2}", driver.time(), dusk.intensity());

    Ok(())
}
