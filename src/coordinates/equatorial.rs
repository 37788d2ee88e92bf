use std::fmt;

use crate::angle::to_hr;
use crate::constants::{Degree, Hour, Radian};
use crate::coordinates::{CoordinateSystem, SphericalCoordinates};
use crate::rigel_errors::RigelError;

/// Equatorial coordinates: right ascension in `[0, 2π)` and declination in
/// `[-π/2, π/2]`, both in radians.
#[derive(Debug, Clone, Copy)]
pub struct EquatorialCoordinates(SphericalCoordinates);

impl EquatorialCoordinates {
    /// Build equatorial coordinates from a right ascension and a declination in radians.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::InvalidCoordinate`] if `ra ∉ [0, 2π)` or `dec ∉ [-π/2, π/2]`.
    pub fn of(ra: Radian, dec: Radian) -> Result<Self, RigelError> {
        SphericalCoordinates::celestial(
            CoordinateSystem::Equatorial,
            ("right ascension", ra),
            ("declination", dec),
        )
        .map(EquatorialCoordinates)
    }

    pub(crate) fn from_normalized(ra: Radian, dec: Radian) -> Self {
        EquatorialCoordinates(SphericalCoordinates::normalized(ra, dec))
    }

    /// Right ascension in radians
    pub fn ra(&self) -> Radian {
        self.0.lon()
    }

    /// Right ascension in degrees
    pub fn ra_deg(&self) -> Degree {
        self.0.lon_deg()
    }

    /// Right ascension in hours
    pub fn ra_hr(&self) -> Hour {
        to_hr(self.0.lon())
    }

    /// Declination in radians
    pub fn dec(&self) -> Radian {
        self.0.lat()
    }

    /// Declination in degrees
    pub fn dec_deg(&self) -> Degree {
        self.0.lat_deg()
    }
}

impl fmt::Display for EquatorialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ra={:.4}h, dec={:.4}°)", self.ra_hr(), self.dec_deg())
    }
}
