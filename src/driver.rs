//! Day/night sun light driver.
//!
//! A host-side clock that advances simulated time each frame and turns the sun position
//! into a light orientation and intensity. Rendering is left to the caller: the driver
//! only hands out [`SunLight`] values.
//!
//! # Example
//! ```rust
//! use entropedia_sun::driver::{SunDriver, SunDriverConfig};
//! use chrono::{DateTime, FixedOffset};
//!
//! let start = "2024-06-21T05:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let config = SunDriverConfig {
//!     latitude: 48.21,
//!     longitude: 16.37,
//!     time_speed: 600.0, // ten simulated minutes per real second
//!     frame_steps: 1,
//! };
//! let mut driver = SunDriver::new(config, start).unwrap();
//!
//! // One frame at 60 fps
//! let light = driver.update(1.0 / 60.0).unwrap();
//! println!("pitch {:.1}°, yaw {:.1}°", light.pitch_degrees(), light.yaw_degrees());
//! ```

use crate::error::{check_frame_steps, check_time_speed};
use crate::math::{inverse_lerp, round};
use crate::{Error, GeoCoordinate, Result, SunPosition, sun};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, TimeZone, Timelike};
use log::{debug, trace};

/// Altitude in degrees at which the light starts to fade in.
const TWILIGHT_ALTITUDE: f64 = -12.0;

/// Altitude in degrees at which the light reaches full intensity.
const HORIZON_ALTITUDE: f64 = 0.0;

/// Settings for a [`SunDriver`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SunDriverConfig {
    /// Observer latitude in degrees
    pub latitude: f64,
    /// Observer longitude in degrees
    pub longitude: f64,
    /// Simulated seconds per real second
    pub time_speed: f64,
    /// Emit a new light every `frame_steps` updates
    pub frame_steps: u32,
}

impl Default for SunDriverConfig {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            time_speed: 1.0,
            frame_steps: 1,
        }
    }
}

impl SunDriverConfig {
    /// Checks every setting.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude`, `InvalidTimeSpeed` or
    /// `InvalidFrameSteps` for the first setting out of range.
    pub fn validate(&self) -> Result<()> {
        GeoCoordinate::new(self.latitude, self.longitude)?;
        check_time_speed(self.time_speed)?;
        check_frame_steps(self.frame_steps)?;
        Ok(())
    }
}

/// Orientation and brightness of a directional sun light.
///
/// Pitch is the sun altitude and yaw the azimuth, both in degrees, ready to be used as
/// Euler angles for the light transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunLight {
    position: SunPosition,
    intensity: f64,
}

impl SunLight {
    /// Derives the light from a sun position.
    #[must_use]
    pub fn from_position(position: SunPosition) -> Self {
        Self {
            position,
            intensity: light_intensity(position.altitude_degrees()),
        }
    }

    /// Gets the sun position the light was derived from.
    #[must_use]
    pub const fn position(&self) -> SunPosition {
        self.position
    }

    /// Rotation about the horizontal axis in degrees (sun altitude).
    #[must_use]
    pub const fn pitch_degrees(&self) -> f64 {
        self.position.altitude_degrees()
    }

    /// Rotation about the vertical axis in degrees (sun azimuth).
    #[must_use]
    pub const fn yaw_degrees(&self) -> f64 {
        self.position.azimuth_degrees()
    }

    /// Light intensity in [0, 1].
    #[must_use]
    pub const fn intensity(&self) -> f64 {
        self.intensity
    }
}

/// Light intensity for a sun altitude in degrees.
///
/// Zero at or below -12° (end of nautical twilight), rising linearly to one at the horizon
/// and staying there while the sun is up.
///
/// # Example
/// ```
/// # use entropedia_sun::driver::light_intensity;
/// assert_eq!(light_intensity(-20.0), 0.0);
/// assert_eq!(light_intensity(-6.0), 0.5);
/// assert_eq!(light_intensity(35.0), 1.0);
/// ```
#[must_use]
pub fn light_intensity(altitude_degrees: f64) -> f64 {
    inverse_lerp(TWILIGHT_ALTITUDE, HORIZON_ALTITUDE, altitude_degrees)
}

/// Frame-stepped simulated clock driving a sun light.
#[derive(Debug, Clone)]
pub struct SunDriver {
    location: GeoCoordinate,
    time_speed: f64,
    frame_steps: u32,
    frame_step: u32,
    date: NaiveDate,
    time: DateTime<FixedOffset>,
}

impl SunDriver {
    /// Creates a driver starting at `start`, keeping its UTC offset as local time.
    ///
    /// # Errors
    /// Returns an error if the configuration does not validate.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new<Tz: TimeZone>(config: SunDriverConfig, start: DateTime<Tz>) -> Result<Self> {
        config.validate()?;
        let time = to_fixed_offset(&start);
        debug!(
            "sun driver starting at {time:?} for ({}, {})",
            config.latitude, config.longitude
        );
        Ok(Self {
            location: GeoCoordinate::new(config.latitude, config.longitude)?,
            time_speed: config.time_speed,
            frame_steps: config.frame_steps,
            frame_step: 0,
            date: time.date_naive(),
            time,
        })
    }

    /// Current simulated local time.
    #[must_use]
    pub const fn time(&self) -> DateTime<FixedOffset> {
        self.time
    }

    /// Local calendar date that [`SunDriver::set_time`] is relative to.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Observer location.
    #[must_use]
    pub const fn location(&self) -> GeoCoordinate {
        self.location
    }

    /// Simulated seconds per real second.
    #[must_use]
    pub const fn time_speed(&self) -> f64 {
        self.time_speed
    }

    /// Number of updates between emitted lights.
    #[must_use]
    pub const fn frame_steps(&self) -> u32 {
        self.frame_steps
    }

    /// Sets the time of day on the current date.
    ///
    /// `hour` may be 24 and `minute` may be 60; both roll over into the next hour or day.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if `hour > 24` or `minute > 60`.
    pub fn set_time(&mut self, hour: u32, minute: u32) -> Result<()> {
        self.time = time_on(self.date, *self.time.offset(), hour, minute)?;
        debug!("sun clock set to {:?}", self.time);
        Ok(())
    }

    /// Moves the clock to the date and hour:minute of `datetime`, dropping seconds.
    ///
    /// The UTC offset of `datetime` becomes the driver's local offset.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the resulting time cannot be represented.
    ///
    /// On error the clock and date are left unchanged.
    #[allow(clippy::needless_pass_by_value)]
    pub fn set_date<Tz: TimeZone>(&mut self, datetime: DateTime<Tz>) -> Result<()> {
        let local = to_fixed_offset(&datetime);
        let date = local.date_naive();
        let time = time_on(date, *local.offset(), local.hour(), local.minute())?;
        self.date = date;
        self.time = time;
        debug!("sun clock set to {:?}", self.time);
        Ok(())
    }

    /// Moves the observer.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates; the
    /// previous location is kept.
    pub fn set_location(&mut self, latitude: f64, longitude: f64) -> Result<()> {
        self.location = GeoCoordinate::new(latitude, longitude)?;
        debug!("sun driver moved to ({latitude}, {longitude})");
        Ok(())
    }

    /// Changes how many simulated seconds pass per real second.
    ///
    /// # Errors
    /// Returns `InvalidTimeSpeed` if `time_speed` is not finite.
    pub fn set_time_speed(&mut self, time_speed: f64) -> Result<()> {
        check_time_speed(time_speed)?;
        self.time_speed = time_speed;
        Ok(())
    }

    /// Changes how many updates pass between emitted lights.
    ///
    /// The step counter restarts, so the next update emits.
    ///
    /// # Errors
    /// Returns `InvalidFrameSteps` if `frame_steps` is zero.
    pub fn set_update_steps(&mut self, frame_steps: u32) -> Result<()> {
        check_frame_steps(frame_steps)?;
        self.frame_steps = frame_steps;
        self.frame_step = 0;
        Ok(())
    }

    /// Advances the clock by `delta_seconds` of real time.
    ///
    /// Simulated time moves by `time_speed * delta_seconds`, at nanosecond resolution.
    /// Returns a fresh light on the first update and then on every `frame_steps`-th one,
    /// `None` in between.
    pub fn update(&mut self, delta_seconds: f64) -> Option<SunLight> {
        self.advance(delta_seconds);

        let emit = self.frame_step == 0;
        self.frame_step = (self.frame_step + 1) % self.frame_steps;
        if !emit {
            return None;
        }

        let light = self.current_light();
        trace!(
            "sun at {:?}: pitch {:.2}°, yaw {:.2}°, intensity {:.3}",
            self.time,
            light.pitch_degrees(),
            light.yaw_degrees(),
            light.intensity()
        );
        Some(light)
    }

    /// Computes the light for the current simulated time.
    #[must_use]
    pub fn current_light(&self) -> SunLight {
        SunLight::from_position(sun::solar_position(
            self.time,
            self.location.latitude(),
            self.location.longitude(),
        ))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn advance(&mut self, delta_seconds: f64) {
        let nanos = round(self.time_speed * delta_seconds * 1e9) as i64;
        match self.time.checked_add_signed(Duration::nanoseconds(nanos)) {
            Some(time) => self.time = time,
            None => debug!("sun clock cannot advance past {:?}", self.time),
        }
    }
}

/// `hour:minute` after local midnight of `date`, allowing the 24:00 and :60 picker values.
fn time_on(
    date: NaiveDate,
    offset: FixedOffset,
    hour: u32,
    minute: u32,
) -> Result<DateTime<FixedOffset>> {
    if hour > 24 {
        return Err(Error::invalid_datetime("hour must be between 0 and 24"));
    }
    if minute > 60 {
        return Err(Error::invalid_datetime("minute must be between 0 and 60"));
    }

    let out_of_range = Error::invalid_datetime("time of day is out of range");
    let midnight = date.and_hms_opt(0, 0, 0).ok_or(out_of_range)?;
    let midnight = offset
        .from_local_datetime(&midnight)
        .single()
        .ok_or(out_of_range)?;
    let time_of_day = Duration::hours(i64::from(hour)) + Duration::minutes(i64::from(minute));
    midnight.checked_add_signed(time_of_day).ok_or(out_of_range)
}

fn to_fixed_offset<Tz: TimeZone>(datetime: &DateTime<Tz>) -> DateTime<FixedOffset> {
    datetime.with_timezone(&datetime.offset().fix())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> DateTime<FixedOffset> {
        "2024-06-21T12:00:00+02:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap()
    }

    fn vienna() -> SunDriverConfig {
        SunDriverConfig {
            latitude: 48.21,
            longitude: 16.37,
            ..SunDriverConfig::default()
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(SunDriverConfig::default().validate().is_ok());

        let bad_latitude = SunDriverConfig {
            latitude: 95.0,
            ..SunDriverConfig::default()
        };
        assert_eq!(
            bad_latitude.validate(),
            Err(Error::invalid_latitude(95.0))
        );

        let bad_steps = SunDriverConfig {
            frame_steps: 0,
            ..SunDriverConfig::default()
        };
        assert_eq!(bad_steps.validate(), Err(Error::invalid_frame_steps(0)));

        let bad_speed = SunDriverConfig {
            time_speed: f64::INFINITY,
            ..SunDriverConfig::default()
        };
        assert!(bad_speed.validate().is_err());
        assert!(SunDriver::new(bad_speed, start()).is_err());
    }

    #[test]
    fn test_light_intensity_curve() {
        assert_eq!(light_intensity(-90.0), 0.0);
        assert_eq!(light_intensity(-12.0), 0.0);
        assert_eq!(light_intensity(-3.0), 0.75);
        assert_eq!(light_intensity(0.0), 1.0);
        assert_eq!(light_intensity(60.0), 1.0);
    }

    #[test]
    fn test_light_from_position() {
        let light = SunLight::from_position(SunPosition::new(
            180_f64.to_radians(),
            (-6_f64).to_radians(),
        ));
        assert!((light.yaw_degrees() - 180.0).abs() < 1e-9);
        assert!((light.pitch_degrees() + 6.0).abs() < 1e-9);
        assert!((light.intensity() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_update_advances_by_time_speed() {
        let config = SunDriverConfig {
            time_speed: 60.0,
            ..vienna()
        };
        let mut driver = SunDriver::new(config, start()).unwrap();
        driver.update(0.5);
        assert_eq!(driver.time(), start() + Duration::seconds(30));

        driver.set_time_speed(-120.0).unwrap();
        driver.update(1.0);
        assert_eq!(driver.time(), start() - Duration::seconds(90));
    }

    #[test]
    fn test_update_rounds_to_nearest_nanosecond() {
        let mut driver = SunDriver::new(vienna(), start()).unwrap();
        driver.update(2.4e-9);
        assert_eq!(driver.time(), start() + Duration::nanoseconds(2));
        driver.update(2.6e-9);
        assert_eq!(driver.time(), start() + Duration::nanoseconds(5));
    }

    #[test]
    fn test_update_throttles_to_frame_steps() {
        let config = SunDriverConfig {
            frame_steps: 3,
            ..vienna()
        };
        let mut driver = SunDriver::new(config, start()).unwrap();

        let emitted: Vec<bool> = (0..7).map(|_| driver.update(0.1).is_some()).collect();
        assert_eq!(emitted, [true, false, false, true, false, false, true]);

        driver.set_update_steps(2).unwrap();
        let emitted: Vec<bool> = (0..4).map(|_| driver.update(0.1).is_some()).collect();
        assert_eq!(emitted, [true, false, true, false]);

        assert!(driver.set_update_steps(0).is_err());
        assert_eq!(driver.frame_steps(), 2);
    }

    #[test]
    fn test_every_frame_by_default() {
        let mut driver = SunDriver::new(vienna(), start()).unwrap();
        assert!((0..5).all(|_| driver.update(1.0 / 60.0).is_some()));
    }

    #[test]
    fn test_emitted_light_matches_clock() {
        let mut driver = SunDriver::new(vienna(), start()).unwrap();
        let light = driver.update(0.0).unwrap();
        let expected = sun::solar_position(start(), 48.21, 16.37);
        assert_eq!(light.position(), expected);
        assert_eq!(light, driver.current_light());
        assert_eq!(light.intensity(), 1.0);
    }

    #[test]
    fn test_set_time_uses_current_date_and_offset() {
        let mut driver = SunDriver::new(vienna(), start()).unwrap();
        driver.update(3600.0);

        driver.set_time(6, 45).unwrap();
        let expected = "2024-06-21T06:45:00+02:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        assert_eq!(driver.time(), expected);

        driver.set_time(24, 0).unwrap();
        let expected = "2024-06-22T00:00:00+02:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        assert_eq!(driver.time(), expected);
        assert_eq!(driver.date(), NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());

        assert!(driver.set_time(25, 0).is_err());
        assert!(driver.set_time(0, 61).is_err());
    }

    #[test]
    fn test_set_date_drops_seconds_and_adopts_offset() {
        let mut driver = SunDriver::new(vienna(), start()).unwrap();
        let new_date = "2024-12-21T17:42:31-05:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        driver.set_date(new_date).unwrap();

        let expected = "2024-12-21T17:42:00-05:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        assert_eq!(driver.time(), expected);
        assert_eq!(driver.time().offset().local_minus_utc(), -5 * 3600);
        assert_eq!(driver.date(), NaiveDate::from_ymd_opt(2024, 12, 21).unwrap());
    }

    #[test]
    fn test_set_date_keeps_previous_clock_on_error() {
        let mut driver = SunDriver::new(vienna(), start()).unwrap();
        driver.update(90.0);
        let (time, date) = (driver.time(), driver.date());

        // Local midnight of the earliest date lies before the representable UTC range
        let earliest = FixedOffset::east_opt(3600)
            .unwrap()
            .from_local_datetime(&NaiveDate::MIN.and_hms_opt(1, 30, 0).unwrap())
            .single()
            .unwrap();
        assert_eq!(
            driver.set_date(earliest),
            Err(Error::invalid_datetime("time of day is out of range"))
        );
        assert_eq!(driver.time(), time);
        assert_eq!(driver.date(), date);

        driver.set_time(7, 15).unwrap();
        let expected = "2024-06-21T07:15:00+02:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        assert_eq!(driver.time(), expected);
    }

    #[test]
    fn test_set_location_keeps_previous_on_error() {
        let mut driver = SunDriver::new(vienna(), start()).unwrap();
        assert!(driver.set_location(-33.8688, 151.2093).is_ok());
        assert!(driver.set_location(120.0, 0.0).is_err());
        assert_eq!(driver.location(), GeoCoordinate::new(-33.8688, 151.2093).unwrap());
    }

    #[test]
    fn test_night_light_is_dark() {
        let midnight = "2024-12-21T00:00:00+01:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let config = SunDriverConfig {
            latitude: 52.52,
            longitude: 13.405,
            ..SunDriverConfig::default()
        };
        let driver = SunDriver::new(config, midnight).unwrap();
        let light = driver.current_light();
        assert!(light.pitch_degrees() < -50.0);
        assert_eq!(light.intensity(), 0.0);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_config_deserializes_with_defaults() {
        let config: SunDriverConfig =
            serde_json::from_str(r#"{"latitude":48.21,"longitude":16.37}"#).unwrap();
        assert_eq!(config, vienna());
    }
}
