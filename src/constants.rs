//! # Constants and type definitions for Rigel
//!
//! This module centralizes the **conversion factors**, **time constants** and
//! **unit type aliases** used throughout the `rigel` library.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, hours ↔ radians, arcseconds ↔ radians)
//! - Day, century and millisecond lengths used by the epoch arithmetic
//! - Type aliases documenting the unit carried by a bare `f64`
//!
//! Angles are always carried as `f64` **radians** inside the engine; the aliases
//! below only document intent at API boundaries.

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, one full turn in radians
pub const DPI: f64 = std::f64::consts::TAU;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Hours → degrees
pub const DEG_PER_HOUR: f64 = 15.0;

// -------------------------------------------------------------------------------------------------
// Time constants
// -------------------------------------------------------------------------------------------------

/// Number of milliseconds in a day
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Number of milliseconds in an hour
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Length of the tropical year in days
pub const TROPICAL_YEAR: f64 = 365.242191;

/// Ratio of the sidereal day rate to the solar day rate used by the
/// Greenwich sidereal time series
pub const SIDEREAL_RATE: f64 = 1.002737909;

// -------------------------------------------------------------------------------------------------
// Numerical constants
// -------------------------------------------------------------------------------------------------

/// Smallest magnitude kept for `cos(latitude)` of an observer; closer to zero
/// the value is replaced by this signed epsilon (observer at a pole).
pub const POLE_EPSILON: f64 = 1e-10;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Angle in degrees
pub type Degree = f64;
/// Angle in hours (1h = 15°)
pub type Hour = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Signed time interval in days
pub type Days = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
