use crate::celestial::{Celestial, CelestialObject};
use crate::constants::Radian;
use crate::coordinates::EquatorialCoordinates;
use crate::rigel_errors::RigelError;

/// A planet of the solar system seen from Earth at one instant.
#[derive(Debug, Clone)]
pub struct Planet {
    object: CelestialObject,
}

impl Planet {
    /// Build a planet.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::EmptyName`] if `name` is empty.
    /// * [`RigelError::NegativeAngularSize`] if `angular_size < 0`.
    pub fn new(
        name: impl Into<String>,
        equatorial_position: EquatorialCoordinates,
        angular_size: Radian,
        magnitude: f64,
    ) -> Result<Self, RigelError> {
        Ok(Planet {
            object: CelestialObject::new(name, equatorial_position, angular_size, magnitude)?,
        })
    }
}

impl Celestial for Planet {
    fn object(&self) -> &CelestialObject {
        &self.object
    }
}
