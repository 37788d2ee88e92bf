//! # Coordinate conversions
//!
//! ## Overview
//!
//! A conversion is an immutable value built once for a given instant (and observer),
//! caching every trigonometric quantity that does not depend on the converted
//! coordinates. [`CoordinateConversion::apply`] is then a handful of closed-form
//! operations per call.
//!
//! | Conversion                             | Depends on          |
//! |----------------------------------------|---------------------|
//! | [`EclipticToEquatorialConversion`]     | instant             |
//! | [`EquatorialToHorizontalConversion`]   | instant, observer   |
//!
//! Conversions are total: every valid input produces a valid output coordinate.
//! Intermediate sines are clipped into `[-1, 1]` before `asin`.
//!
//! Both types are `Send + Sync` and carry no equality.

pub mod ecliptic_to_equatorial;
pub mod equatorial_to_horizontal;

pub use ecliptic_to_equatorial::EclipticToEquatorialConversion;
pub use equatorial_to_horizontal::EquatorialToHorizontalConversion;

/// A function from one coordinate system to another.
pub trait CoordinateConversion<From, To> {
    /// Convert `coordinates` into the target system.
    fn apply(&self, coordinates: &From) -> To;
}
