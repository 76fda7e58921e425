//! # Entropedia Sun
//!
//! Sun position for day/night lighting: azimuth and altitude of the sun for any
//! timezone-aware instant and observer location, plus a frame-stepped driver that turns
//! them into a directional light orientation and intensity.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The position algorithm is a closed-form low-precision approximation (accuracy around a
//! degree) that is only valid between 1900-03-01 and 2100-02-28. It never fails: any
//! finite input produces angles, and out-of-range inputs simply produce meaningless ones.
//!
//! ## Features
//!
//! - Pure, stateless calculation, safe to call from any number of threads
//! - Works in `no_std` (with `libm`), with or without `chrono`
//! - Split functions to reuse the time-dependent part across many locations
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable `DateTime<Tz>` based API and the [`driver`] module
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: Serialize/deserialize positions, coordinates and driver settings
//!
//! ## Quick Start
//!
//! ### Sun Position (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use entropedia_sun::sun;
//! use chrono::{DateTime, FixedOffset};
//!
//! // Sun position for Vienna at noon
//! let datetime = "2024-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let position = sun::solar_position(datetime, 48.21, 16.37);
//!
//! println!("Azimuth: {:.3}°", position.azimuth_degrees());
//! println!("Altitude: {:.3}°", position.altitude_degrees());
//! # }
//! ```
//!
//! ### Sun Position (numeric API, no chrono)
//! ```rust
//! use entropedia_sun::{sun, time::UtcInstant};
//!
//! let instant = UtcInstant::from_utc(2024, 6, 21, 10, 0, 0.0).unwrap();
//! let position = sun::solar_position_from_instant(instant, 48.21, 16.37);
//!
//! assert!(position.altitude_degrees() > 60.0);
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0 = North, measured clockwise, in radians [0, 2π)
//! - **Altitude**: 0 = horizon, π/2 = overhead, in radians [-π/2, π/2]
//! - **Longitude**: degrees east, ±180° or 0–360°

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::sun::SunTimeDependent;
pub use crate::types::{GeoCoordinate, SunPosition};

// Algorithm modules
pub mod sun;

// Core modules
pub mod error;
pub mod types;

// Public modules
#[cfg(feature = "chrono")]
pub mod driver;
pub mod math;
pub mod time;
