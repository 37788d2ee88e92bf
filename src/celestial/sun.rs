use crate::celestial::{Celestial, CelestialObject};
use crate::constants::Radian;
use crate::coordinates::{EclipticCoordinates, EquatorialCoordinates};
use crate::rigel_errors::RigelError;

/// Apparent visual magnitude of the Sun
pub const SUN_MAGNITUDE: f64 = -26.7;

/// The Sun at one instant.
#[derive(Debug, Clone)]
pub struct Sun {
    object: CelestialObject,
    ecliptic_position: EclipticCoordinates,
    mean_anomaly: Radian,
}

impl Sun {
    /// Build the Sun, named "Sun" with magnitude −26.7.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::NegativeAngularSize`] if `angular_size < 0`.
    pub fn new(
        ecliptic_position: EclipticCoordinates,
        equatorial_position: EquatorialCoordinates,
        angular_size: Radian,
        mean_anomaly: Radian,
    ) -> Result<Self, RigelError> {
        Ok(Sun {
            object: CelestialObject::new("Sun", equatorial_position, angular_size, SUN_MAGNITUDE)?,
            ecliptic_position,
            mean_anomaly,
        })
    }

    pub fn ecliptic_position(&self) -> &EclipticCoordinates {
        &self.ecliptic_position
    }

    /// Mean anomaly of the Sun's apparent orbit, in radians (not normalized).
    pub fn mean_anomaly(&self) -> Radian {
        self.mean_anomaly
    }
}

impl Celestial for Sun {
    fn object(&self) -> &CelestialObject {
        &self.object
    }
}
