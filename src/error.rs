//! Error types for the sun position library.
//!
//! The position calculation itself never fails; these errors come from validating
//! date/time components, coordinates and driver settings.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while building inputs or configuring the sun driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +360 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid date/time component.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Invalid time speed multiplier (must be finite).
    InvalidTimeSpeed {
        /// The invalid multiplier provided.
        value: f64,
    },
    /// Invalid update step count (must be at least 1).
    InvalidFrameSteps {
        /// The invalid step count provided.
        value: u32,
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
                    "invalid longitude {value}° (must be between -180° and +360°)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::InvalidTimeSpeed { value } => {
                write!(f, "invalid time speed {value} (must be finite)")
            }
            Self::InvalidFrameSteps { value } => {
                write!(f, "invalid frame steps {value} (must be at least 1)")
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

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates an invalid time speed error.
    #[must_use]
    pub const fn invalid_time_speed(value: f64) -> Self {
        Self::InvalidTimeSpeed { value }
    }

    /// Creates an invalid frame steps error.
    #[must_use]
    pub const fn invalid_frame_steps(value: u32) -> Self {
        Self::InvalidFrameSteps { value }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range.
///
/// Both the ±180° and the 0–360° conventions are accepted, since longitude only enters
/// the calculation as an additive hour angle correction.
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +360 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=360.0).contains(&longitude) {
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

/// Validates a time speed multiplier.
///
/// Zero and negative speeds are allowed (paused clock, time running backwards).
///
/// # Errors
/// Returns `InvalidTimeSpeed` if the multiplier is NaN or infinite.
pub const fn check_time_speed(time_speed: f64) -> Result<()> {
    if !time_speed.is_finite() {
        return Err(Error::invalid_time_speed(time_speed));
    }
    Ok(())
}

/// Validates the number of frames between sun updates.
///
/// # Errors
/// Returns `InvalidFrameSteps` if `frame_steps` is zero.
pub const fn check_frame_steps(frame_steps: u32) -> Result<()> {
    if frame_steps == 0 {
        return Err(Error::invalid_frame_steps(frame_steps));
    }
    Ok(())
}
