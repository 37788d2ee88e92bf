use std::fmt;

use crate::constants::{Degree, Radian};
use crate::coordinates::{CoordinateSystem, SphericalCoordinates};
use crate::rigel_errors::RigelError;

/// Ecliptic coordinates: longitude λ in `[0, 2π)` and latitude β in `[-π/2, π/2]`.
#[derive(Debug, Clone, Copy)]
pub struct EclipticCoordinates(SphericalCoordinates);

impl EclipticCoordinates {
    /// Build ecliptic coordinates from a longitude and a latitude in radians.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::InvalidCoordinate`] if `lon ∉ [0, 2π)` or `lat ∉ [-π/2, π/2]`.
    pub fn of(lon: Radian, lat: Radian) -> Result<Self, RigelError> {
        SphericalCoordinates::celestial(
            CoordinateSystem::Ecliptic,
            ("longitude", lon),
            ("latitude", lat),
        )
        .map(EclipticCoordinates)
    }

    pub(crate) fn from_normalized(lon: Radian, lat: Radian) -> Self {
        EclipticCoordinates(SphericalCoordinates::normalized(lon, lat))
    }

    pub fn lon(&self) -> Radian {
        self.0.lon()
    }

    pub fn lon_deg(&self) -> Degree {
        self.0.lon_deg()
    }

    pub fn lat(&self) -> Radian {
        self.0.lat()
    }

    pub fn lat_deg(&self) -> Degree {
        self.0.lat_deg()
    }
}

impl fmt::Display for EclipticCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(λ={:.4}°, β={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}
