use crate::celestial::{Celestial, CelestialObject};
use crate::coordinates::EquatorialCoordinates;
use crate::interval::{ClosedInterval, Interval};
use crate::rigel_errors::RigelError;

/// Valid B−V color indices
const COLOR_INDEX_RANGE: ClosedInterval = ClosedInterval::from_const(-0.5, 5.5);

/// A catalogued star. Stars are points: their angular size is always zero.
#[derive(Debug, Clone)]
pub struct Star {
    object: CelestialObject,
    hipparcos_id: i64,
    color_index: f64,
}

impl Star {
    /// Build a star.
    ///
    /// Arguments
    /// ---------
    /// * `hipparcos_id`: identifier in the Hipparcos catalogue.
    /// * `name`: display name, not empty.
    /// * `equatorial_position`: J2000 equatorial position.
    /// * `magnitude`: visual magnitude.
    /// * `color_index`: B−V color index.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::InvalidHipparcosId`] if `hipparcos_id < 0`.
    /// * [`RigelError::InvalidColorIndex`] if `color_index ∉ [-0.5, 5.5]`.
    /// * [`RigelError::EmptyName`] if `name` is empty.
    pub fn new(
        hipparcos_id: i64,
        name: impl Into<String>,
        equatorial_position: EquatorialCoordinates,
        magnitude: f64,
        color_index: f64,
    ) -> Result<Self, RigelError> {
        if hipparcos_id < 0 {
            return Err(RigelError::InvalidHipparcosId(hipparcos_id));
        }
        if !COLOR_INDEX_RANGE.contains(color_index) {
            return Err(RigelError::InvalidColorIndex(color_index));
        }
        Ok(Star {
            object: CelestialObject::new(name, equatorial_position, 0.0, magnitude)?,
            hipparcos_id,
            color_index,
        })
    }

    pub fn hipparcos_id(&self) -> i64 {
        self.hipparcos_id
    }

    /// B−V color index
    pub fn color_index(&self) -> f64 {
        self.color_index
    }

    /// Approximate effective temperature in Kelvin, floored to an integer.
    ///
    /// Ballesteros' formula for a black body of color index `c`:
    ///
    /// ```text
    /// T = 4600 (1 / (0.92 c + 1.7) + 1 / (0.92 c + 0.62))
    /// ```
    pub fn color_temperature(&self) -> u32 {
        let x = 0.92 * self.color_index;
        (4600.0 * (1.0 / (x + 1.7) + 1.0 / (x + 0.62))).floor() as u32
    }
}

impl Celestial for Star {
    fn object(&self) -> &CelestialObject {
        &self.object
    }
}
