use std::fmt;

use crate::angle::of_deg;
use crate::constants::{Degree, Radian};
use crate::coordinates::{check, CoordinateSystem, SphericalCoordinates};
use crate::interval::{ClosedInterval, Interval, RightOpenInterval};
use crate::rigel_errors::RigelError;

const LONGITUDE_DEG: RightOpenInterval = RightOpenInterval::from_const(-180.0, 180.0);
const LATITUDE_DEG: ClosedInterval = ClosedInterval::from_const(-90.0, 90.0);

/// Position of an observer on Earth.
///
/// Geographic positions are given in degrees by convention: longitude in
/// `[-180°, 180°)` positive East of Greenwich, latitude in `[-90°, 90°]`.
/// The accessors without suffix return radians like every other coordinate type.
#[derive(Debug, Clone, Copy)]
pub struct GeographicCoordinates(SphericalCoordinates);

impl GeographicCoordinates {
    /// Build a geographic position from a longitude and a latitude in degrees.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::InvalidCoordinate`] if `lon_deg ∉ [-180, 180)` or `lat_deg ∉ [-90, 90]`.
    ///   The reported value is the rejected input, in degrees.
    pub fn of_deg(lon_deg: Degree, lat_deg: Degree) -> Result<Self, RigelError> {
        check(CoordinateSystem::Geographic, "longitude", lon_deg, &LONGITUDE_DEG)?;
        check(CoordinateSystem::Geographic, "latitude", lat_deg, &LATITUDE_DEG)?;
        Ok(GeographicCoordinates(SphericalCoordinates::checked(
            of_deg(lon_deg),
            of_deg(lat_deg),
        )))
    }

    /// Return `true` if `lon_deg` is a valid longitude in degrees.
    pub fn is_valid_lon_deg(lon_deg: Degree) -> bool {
        LONGITUDE_DEG.contains(lon_deg)
    }

    /// Return `true` if `lat_deg` is a valid latitude in degrees.
    pub fn is_valid_lat_deg(lat_deg: Degree) -> bool {
        LATITUDE_DEG.contains(lat_deg)
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

impl fmt::Display for GeographicCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lon={:.4}°, lat={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}

#[cfg(test)]
mod geographic_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_validity() {
        assert!(GeographicCoordinates::is_valid_lon_deg(-180.0));
        assert!(!GeographicCoordinates::is_valid_lon_deg(180.0));
        assert!(GeographicCoordinates::is_valid_lat_deg(90.0));
        assert!(GeographicCoordinates::is_valid_lat_deg(-90.0));
        assert!(!GeographicCoordinates::is_valid_lat_deg(90.0001));
        assert!(!GeographicCoordinates::is_valid_lon_deg(f64::NAN));
    }

    #[test]
    fn test_of_deg() {
        let epfl = GeographicCoordinates::of_deg(6.57, 46.52).unwrap();
        assert_abs_diff_eq!(epfl.lon_deg(), 6.57, epsilon = 1e-12);
        assert_abs_diff_eq!(epfl.lat_deg(), 46.52, epsilon = 1e-12);
        assert_abs_diff_eq!(epfl.lon(), 6.57_f64.to_radians(), epsilon = 1e-15);

        let err = GeographicCoordinates::of_deg(200.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            RigelError::InvalidCoordinate {
                system: CoordinateSystem::Geographic,
                component: "longitude",
                value: 200.0,
            }
        );
        assert!(GeographicCoordinates::of_deg(0.0, -91.0).is_err());
    }
}
