//! Low-precision sun position algorithm.
//!
//! Converts an instant and an observer location into the sun's azimuth and altitude using
//! a closed-form approximation of the solar coordinates (mean longitude, mean anomaly,
//! equation of centre) and Greenwich sidereal time. It is based on the method published by
//! the Institute of Theoretical Astrophysics, University of Oslo
//! (<http://www.astro.uio.no/~bgranslo/aares/calculate.html>).
//!
//! The day count it relies on is only exact from 1900-03-01 to 2100-02-28, and accuracy
//! is in the order of a degree. It is meant for driving lighting, not for solar engineering.
//!
//! # Known deviation
//!
//! Declination is derived from the right ascension, `asin(sin(α) * sin(ε))`, where most
//! published derivations use the ecliptic longitude, `asin(sin(λ) * sin(ε))`. Existing
//! users depend on the resulting values, so the formula is kept as is.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::SunPosition;
use crate::math::{PI, TAU, asin, atan, atan2, correct_angle, cos, degrees_to_radians, sin, tan};
use crate::time::{UtcInstant, centuries};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Ratio of sidereal to solar day length.
const SIDEREAL_RATE: f64 = 366.2422 / 365.2422;

/// Calculate the sun position for a timezone-aware date and time.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time, converted to UTC internally
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees, east positive
///
/// # Returns
/// Azimuth and altitude in radians. Inputs are not validated: out-of-range coordinates
/// yield well-defined but meaningless angles.
///
/// # Example
/// ```rust
/// use entropedia_sun::sun;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let position = sun::solar_position(
///     datetime,
///     37.7749,     // San Francisco latitude
///     -122.4194,   // San Francisco longitude
/// );
///
/// println!("Azimuth: {:.3}°", position.azimuth_degrees());
/// println!("Altitude: {:.3}°", position.altitude_degrees());
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SunPosition {
    solar_position_from_instant(UtcInstant::from_datetime(&datetime), latitude, longitude)
}

/// Calculate the sun position for a UTC instant.
///
/// This is the numeric entry point for callers without chrono (including `no_std`).
///
/// # Example
/// ```rust
/// use entropedia_sun::{sun, time::UtcInstant};
///
/// let instant = UtcInstant::from_utc(2024, 6, 21, 10, 0, 0.0).unwrap();
/// let position = sun::solar_position_from_instant(instant, 48.21, 16.37);
/// assert!(position.is_sun_up());
/// ```
#[must_use]
pub fn solar_position_from_instant(
    instant: UtcInstant,
    latitude: f64,
    longitude: f64,
) -> SunPosition {
    solar_position_with_time_dependent_parts(latitude, longitude, &time_dependent_parts(instant))
}

/// Time-dependent intermediate values of the algorithm.
///
/// Everything here depends only on the instant, so it can be computed once and reused for
/// any number of locations via [`solar_position_with_time_dependent_parts`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimeDependent {
    /// Greenwich sidereal time in degrees, not reduced to one turn
    sidereal_time: f64,
    /// Right ascension in radians
    right_ascension: f64,
    /// Declination in radians
    declination: f64,
}

impl SunTimeDependent {
    /// Greenwich sidereal time in degrees (unreduced).
    #[must_use]
    pub const fn sidereal_time(&self) -> f64 {
        self.sidereal_time
    }

    /// Right ascension of the sun in radians, in (-π, π].
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Declination of the sun in radians.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }
}

/// Compute the time-dependent parts of the algorithm for a UTC instant.
#[must_use]
pub fn time_dependent_parts(instant: UtcInstant) -> SunTimeDependent {
    let hours = instant.hours_since_midnight();

    // Sidereal time from the day count at UTC midnight
    let julian_centuries = centuries(instant.days_since_j2000());
    let sidereal_time_hours = 6.6974 + 2400.0513 * julian_centuries;
    let sidereal_time_ut = sidereal_time_hours + SIDEREAL_RATE * hours;
    let sidereal_time = sidereal_time_ut * 15.0;

    // Solar coordinates at the exact time of day
    let julian_centuries = instant.julian_centuries();
    let mean_longitude = correct_angle(degrees_to_radians(280.466 + 36000.77 * julian_centuries));
    let mean_anomaly = correct_angle(degrees_to_radians(357.529 + 35999.05 * julian_centuries));
    let equation_of_center = degrees_to_radians(
        (1.915 - 0.005 * julian_centuries) * sin(mean_anomaly) + 0.02 * sin(2.0 * mean_anomaly),
    );
    let ecliptic_longitude = correct_angle(mean_longitude + equation_of_center);
    let obliquity = degrees_to_radians(23.439 - 0.013 * julian_centuries);

    let right_ascension = atan2(
        cos(obliquity) * sin(ecliptic_longitude),
        cos(ecliptic_longitude),
    );
    let declination = asin(sin(right_ascension) * sin(obliquity));

    SunTimeDependent {
        sidereal_time,
        right_ascension,
        declination,
    }
}

/// Compute the time-dependent parts for a timezone-aware date and time.
#[cfg(feature = "chrono")]
#[must_use]
pub fn time_dependent_parts_for<Tz: TimeZone>(datetime: &DateTime<Tz>) -> SunTimeDependent {
    time_dependent_parts(UtcInstant::from_datetime(datetime))
}

/// Calculate the sun position for one location from precomputed time-dependent parts.
///
/// Gives exactly the same result as [`solar_position_from_instant`] for the instant the
/// parts were computed from.
///
/// # Example
/// ```rust
/// use entropedia_sun::{sun, time::UtcInstant};
///
/// let instant = UtcInstant::from_utc(2024, 6, 21, 12, 0, 0.0).unwrap();
/// let parts = sun::time_dependent_parts(instant);
///
/// for (lat, lon) in [(48.21, 16.37), (37.7749, -122.4194), (-33.8688, 151.2093)] {
///     let position = sun::solar_position_with_time_dependent_parts(lat, lon, &parts);
///     assert_eq!(position, sun::solar_position_from_instant(instant, lat, lon));
/// }
/// ```
#[must_use]
pub fn solar_position_with_time_dependent_parts(
    latitude: f64,
    longitude: f64,
    parts: &SunTimeDependent,
) -> SunPosition {
    let local_sidereal_time = parts.sidereal_time + longitude;

    let mut hour_angle =
        correct_angle(degrees_to_radians(local_sidereal_time)) - parts.right_ascension;
    if hour_angle > PI {
        hour_angle -= TAU;
    }

    horizontal_position(hour_angle, parts.declination, degrees_to_radians(latitude))
}

/// Convert an hour angle and declination into azimuth and altitude.
///
/// All arguments are in radians. The azimuth quadrant is resolved from the signs of the
/// numerator and denominator of `tan(azimuth)`:
/// a negative denominator means the 2nd or 3rd quadrant (+π), otherwise a negative
/// numerator means the 4th quadrant (+2π).
///
/// A zero denominator is not an error: the quotient becomes infinite and `atan` maps it to
/// ±π/2. Only a zero numerator over a zero denominator yields a NaN azimuth.
///
/// # Example
/// ```rust
/// use entropedia_sun::sun::horizontal_position;
///
/// // Sun on the meridian, south of an observer at 45°N
/// let position = horizontal_position(0.0, 0.0, 45_f64.to_radians());
/// assert!((position.azimuth_degrees() - 180.0).abs() < 1e-9);
/// assert!((position.altitude_degrees() - 45.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn horizontal_position(hour_angle: f64, declination: f64, latitude: f64) -> SunPosition {
    // Rounding can push the sine just past ±1 when the sun transits the zenith
    let sin_altitude =
        sin(latitude) * sin(declination) + cos(latitude) * cos(declination) * cos(hour_angle);
    let altitude = asin(sin_altitude.clamp(-1.0, 1.0));

    let azimuth_numerator = -sin(hour_angle);
    let azimuth_denominator =
        tan(declination) * cos(latitude) - sin(latitude) * cos(hour_angle);
    let mut azimuth = atan(azimuth_numerator / azimuth_denominator);
    if azimuth_denominator < 0.0 {
        azimuth += PI;
    } else if azimuth_numerator < 0.0 {
        azimuth += TAU;
    }

    SunPosition::new(azimuth, altitude)
}
