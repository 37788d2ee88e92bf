//! # Celestial objects
//!
//! ## Overview
//!
//! Every object drawn in the sky shares the same four attributes, gathered in
//! [`CelestialObject`]:
//!
//! - a non-empty `name`,
//! - an `equatorial_position`,
//! - an `angular_size` in radians, never negative,
//! - a visual `magnitude`.
//!
//! The concrete kinds ([`Star`], [`Sun`], [`Moon`], [`Planet`]) embed a
//! `CelestialObject` and add their own attributes. The shared accessors are
//! exposed through the [`Celestial`] trait, whose [`info`](Celestial::info)
//! defaults to the name.
//!
//! Stars are grouped in a [`StarCatalogue`] together with [`Asterism`]s,
//! ordered lists of star indices into that catalogue.

use std::fmt;

use crate::constants::Radian;
use crate::coordinates::EquatorialCoordinates;
use crate::rigel_errors::RigelError;

pub mod asterism;
pub mod moon;
pub mod planet;
pub mod star;
pub mod star_catalogue;
pub mod sun;

pub use asterism::Asterism;
pub use moon::Moon;
pub use planet::Planet;
pub use star::Star;
pub use star_catalogue::{StarCatalogue, StarCatalogueBuilder};
pub use sun::Sun;

/// Attributes shared by every celestial object.
#[derive(Debug, Clone)]
pub struct CelestialObject {
    name: String,
    equatorial_position: EquatorialCoordinates,
    angular_size: Radian,
    magnitude: f64,
}

impl CelestialObject {
    /// Build the shared part of a celestial object.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::EmptyName`] if `name` is empty.
    /// * [`RigelError::NegativeAngularSize`] if `angular_size < 0` (or NaN).
    pub fn new(
        name: impl Into<String>,
        equatorial_position: EquatorialCoordinates,
        angular_size: Radian,
        magnitude: f64,
    ) -> Result<Self, RigelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RigelError::EmptyName);
        }
        if angular_size.is_nan() || angular_size < 0.0 {
            return Err(RigelError::NegativeAngularSize(angular_size));
        }
        Ok(CelestialObject {
            name,
            equatorial_position,
            angular_size,
            magnitude,
        })
    }
}

/// Read access to the attributes every celestial object carries.
pub trait Celestial {
    /// The embedded shared attributes.
    fn object(&self) -> &CelestialObject;

    fn name(&self) -> &str {
        &self.object().name
    }

    fn equatorial_position(&self) -> &EquatorialCoordinates {
        &self.object().equatorial_position
    }

    /// Angular size in radians.
    fn angular_size(&self) -> Radian {
        self.object().angular_size
    }

    fn magnitude(&self) -> f64 {
        self.object().magnitude
    }

    /// Short human-readable description, the name unless the kind says otherwise.
    fn info(&self) -> String {
        self.name().to_string()
    }
}

impl Celestial for CelestialObject {
    fn object(&self) -> &CelestialObject {
        self
    }
}

impl fmt::Display for CelestialObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} size={:.6} rad mag={:.2}",
            self.name, self.equatorial_position, self.angular_size, self.magnitude
        )
    }
}

#[cfg(test)]
mod celestial_test {
    use super::*;

    fn position() -> EquatorialCoordinates {
        EquatorialCoordinates::of(1.0, 0.5).unwrap()
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            CelestialObject::new("", position(), 0.0, 1.0).unwrap_err(),
            RigelError::EmptyName
        );
        assert_eq!(
            CelestialObject::new("Vega", position(), -1e-9, 1.0).unwrap_err(),
            RigelError::NegativeAngularSize(-1e-9)
        );
        assert!(CelestialObject::new("Vega", position(), f64::NAN, 1.0).is_err());
        assert!(CelestialObject::new("Vega", position(), 0.0, 0.03).is_ok());
    }

    #[test]
    fn test_info_defaults_to_name() {
        let obj = CelestialObject::new("Vega", position(), 0.0, 0.03).unwrap();
        assert_eq!(obj.name(), "Vega");
        assert_eq!(obj.info(), "Vega");
        assert_eq!(obj.magnitude(), 0.03);
    }
}
