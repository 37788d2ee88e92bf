use crate::celestial::{Celestial, CelestialObject};
use crate::constants::Radian;
use crate::coordinates::EquatorialCoordinates;
use crate::interval::{ClosedInterval, Interval};
use crate::rigel_errors::RigelError;

const PHASE_RANGE: ClosedInterval = ClosedInterval::from_const(0.0, 1.0);

/// The Moon at one instant.
#[derive(Debug, Clone)]
pub struct Moon {
    object: CelestialObject,
    phase: f64,
}

impl Moon {
    /// Build the Moon, named "Moon".
    ///
    /// Arguments
    /// ---------
    /// * `phase`: illuminated fraction of the disk, `0` new moon, `1` full moon.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::InvalidMoonPhase`] if `phase ∉ [0, 1]`.
    /// * [`RigelError::NegativeAngularSize`] if `angular_size < 0`.
    pub fn new(
        equatorial_position: EquatorialCoordinates,
        angular_size: Radian,
        magnitude: f64,
        phase: f64,
    ) -> Result<Self, RigelError> {
        if !PHASE_RANGE.contains(phase) {
            return Err(RigelError::InvalidMoonPhase(phase));
        }
        Ok(Moon {
            object: CelestialObject::new("Moon", equatorial_position, angular_size, magnitude)?,
            phase,
        })
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl Celestial for Moon {
    fn object(&self) -> &CelestialObject {
        &self.object
    }

    /// Name followed by the illuminated percentage, e.g. `"Moon (37.5%)"`.
    fn info(&self) -> String {
        format!("{} ({:.1}%)", self.name(), self.phase * 100.0)
    }
}

#[cfg(test)]
mod moon_test {
    use super::*;

    #[test]
    fn test_phase_validation() {
        let position = EquatorialCoordinates::of(0.0, 0.0).unwrap();
        assert!(Moon::new(position, 0.009, 0.0, 0.0).is_ok());
        assert!(Moon::new(position, 0.009, 0.0, 1.0).is_ok());
        assert_eq!(
            Moon::new(position, 0.009, 0.0, 1.01).unwrap_err(),
            RigelError::InvalidMoonPhase(1.01)
        );
        assert!(Moon::new(position, 0.009, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_info() {
        let position = EquatorialCoordinates::of(0.0, 0.0).unwrap();
        assert_eq!(Moon::new(position, 0.009, 0.0, 0.375).unwrap().info(), "Moon (37.5%)");
        assert_eq!(Moon::new(position, 0.009, 0.0, 1.0).unwrap().info(), "Moon (100.0%)");
    }
}
