//! Core data types for sun position calculations.

use crate::error::check_coordinates;
use crate::math::{PI, radians_to_degrees};
use crate::Result;

/// Sun position in horizontal coordinates, in radians.
///
/// - Azimuth: 0 = North, measured clockwise (π/2 = East, π = South), range [0, 2π)
/// - Altitude: 0 = horizon, π/2 = directly overhead, negative below the horizon
///
/// The calculation never rejects its inputs, so neither does this type: a position built
/// from nonsensical coordinates carries whatever the formulas produced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    /// Azimuth angle in radians
    azimuth: f64,
    /// Altitude (elevation) angle in radians
    altitude: f64,
}

impl SunPosition {
    /// Creates a sun position from azimuth and altitude in radians.
    ///
    /// # Example
    /// ```
    /// # use entropedia_sun::SunPosition;
    /// let position = SunPosition::new(core::f64::consts::PI, 0.5);
    /// assert_eq!(position.azimuth_degrees(), 180.0);
    /// assert!(position.is_sun_up());
    /// ```
    #[must_use]
    pub const fn new(azimuth: f64, altitude: f64) -> Self {
        Self { azimuth, altitude }
    }

    /// Gets the azimuth in radians (0 = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the altitude above the horizon in radians.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the azimuth in degrees.
    #[must_use]
    pub const fn azimuth_degrees(&self) -> f64 {
        radians_to_degrees(self.azimuth)
    }

    /// Gets the altitude in degrees.
    #[must_use]
    pub const fn altitude_degrees(&self) -> f64 {
        radians_to_degrees(self.altitude)
    }

    /// Gets the zenith angle in radians (π/2 - altitude).
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        PI / 2.0 - self.altitude
    }

    /// Checks if the sun is above the horizon (altitude > 0).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude > 0.0
    }

    /// Checks if the sun is at or below the horizon (altitude ≤ 0).
    #[must_use]
    pub fn is_sun_down(&self) -> bool {
        self.altitude <= 0.0
    }
}

/// A validated observer location in decimal degrees.
///
/// Deserialization goes through [`GeoCoordinate::new`], so out-of-range values are
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeoCoordinate"))]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a location, checking latitude against [-90, 90] and longitude against
    /// [-180, 360].
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range values.
    ///
    /// # Example
    /// ```
    /// # use entropedia_sun::GeoCoordinate;
    /// let vienna = GeoCoordinate::new(48.21, 16.37).unwrap();
    /// assert_eq!(vienna.latitude(), 48.21);
    /// assert!(GeoCoordinate::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Unchecked wire form of [`GeoCoordinate`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeoCoordinate {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeoCoordinate> for GeoCoordinate {
    type Error = crate::Error;

    fn try_from(raw: RawGeoCoordinate) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl Default for GeoCoordinate {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_position_accessors() {
        let pos = SunPosition::new(PI / 2.0, PI / 6.0);
        assert_eq!(pos.azimuth(), PI / 2.0);
        assert_eq!(pos.altitude(), PI / 6.0);
        assert!((pos.azimuth_degrees() - 90.0).abs() < 1e-10);
        assert!((pos.altitude_degrees() - 30.0).abs() < 1e-10);
        assert!((pos.zenith_angle() - PI / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_sun_position_sun_state() {
        let above_horizon = SunPosition::new(PI, 0.3);
        assert!(above_horizon.is_sun_up());
        assert!(!above_horizon.is_sun_down());

        let on_horizon = SunPosition::new(PI, 0.0);
        assert!(!on_horizon.is_sun_up());
        assert!(on_horizon.is_sun_down());

        let below_horizon = SunPosition::new(0.0, -0.8);
        assert!(!below_horizon.is_sun_up());
        assert!(below_horizon.is_sun_down());
    }

    #[test]
    fn test_geo_coordinate_validation() {
        let coord = GeoCoordinate::new(-33.8688, 151.2093).unwrap();
        assert_eq!(coord.latitude(), -33.8688);
        assert_eq!(coord.longitude(), 151.2093);

        assert!(GeoCoordinate::new(52.0, 347.5).is_ok());
        assert!(GeoCoordinate::new(-90.5, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, -200.0).is_err());
        assert!(GeoCoordinate::new(f64::NAN, 0.0).is_err());

        assert_eq!(GeoCoordinate::default(), GeoCoordinate::new(0.0, 0.0).unwrap());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_round_trip() {
        let coord = GeoCoordinate::new(48.21, 16.37).unwrap();
        let json = serde_json::to_string(&coord).unwrap();
        assert_eq!(json, r#"{"latitude":48.21,"longitude":16.37}"#);

        let position: SunPosition =
            serde_json::from_str(r#"{"azimuth":3.0,"altitude":-0.25}"#).unwrap();
        assert_eq!(position, SunPosition::new(3.0, -0.25));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_deserialize_rejects_out_of_range_coordinates() {
        let err = serde_json::from_str::<GeoCoordinate>(r#"{"latitude":500.0,"longitude":-999.0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid latitude 500°"), "{err}");

        let err = serde_json::from_str::<GeoCoordinate>(r#"{"latitude":10.0,"longitude":-999.0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid longitude -999°"), "{err}");

        let coord: GeoCoordinate =
            serde_json::from_str(r#"{"latitude":52.0,"longitude":347.5}"#).unwrap();
        assert_eq!(coord, GeoCoordinate::new(52.0, 347.5).unwrap());
    }
}
