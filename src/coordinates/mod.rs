//! # Spherical coordinate systems
//!
//! Four concrete coordinate types share one `(longitude, latitude)` storage,
//! held in radians, and differ only in the ranges they validate and the names of
//! their accessors:
//!
//! | Type                        | Longitude component        | Latitude component        |
//! |-----------------------------|----------------------------|---------------------------|
//! | [`EquatorialCoordinates`]   | right ascension `[0, 2π)`  | declination `[-π/2, π/2]` |
//! | [`EclipticCoordinates`]     | longitude `[0, 2π)`        | latitude `[-π/2, π/2]`    |
//! | [`HorizontalCoordinates`]   | azimuth `[0, 2π)`          | altitude `[-π/2, π/2]`    |
//! | [`GeographicCoordinates`]   | longitude `[-180°, 180°)`  | latitude `[-90°, 90°]`    |
//!
//! Every constructor validates both components and returns
//! [`RigelError::InvalidCoordinate`] otherwise: no out-of-range coordinate can exist.
//!
//! None of these types implements `PartialEq` or `Hash`. Compare components with a
//! tolerance instead.

use std::fmt;

use crate::angle::to_deg;
use crate::constants::{Degree, Radian};
use crate::interval::{ClosedInterval, Interval, RightOpenInterval};
use crate::rigel_errors::RigelError;

pub mod ecliptic;
pub mod equatorial;
pub mod geographic;
pub mod horizontal;

pub use ecliptic::EclipticCoordinates;
pub use equatorial::EquatorialCoordinates;
pub use geographic::GeographicCoordinates;
pub use horizontal::HorizontalCoordinates;

/// `[0, 2π)`, longitudes of the celestial systems
pub(crate) const LONGITUDE_RANGE: RightOpenInterval =
    RightOpenInterval::from_const(0.0, std::f64::consts::TAU);

/// `[-π/2, π/2]`, latitudes of the celestial systems
pub(crate) const LATITUDE_RANGE: ClosedInterval = ClosedInterval::from_const(
    -std::f64::consts::FRAC_PI_2,
    std::f64::consts::FRAC_PI_2,
);

/// Identifies a coordinate system in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    Equatorial,
    Ecliptic,
    Horizontal,
    Geographic,
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoordinateSystem::Equatorial => "equatorial",
            CoordinateSystem::Ecliptic => "ecliptic",
            CoordinateSystem::Horizontal => "horizontal",
            CoordinateSystem::Geographic => "geographic",
        };
        write!(f, "{name}")
    }
}

/// `(longitude, latitude)` pair in radians shared by all coordinate types.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SphericalCoordinates {
    lon: Radian,
    lat: Radian,
}

impl SphericalCoordinates {
    /// Validate both components against the celestial ranges `[0, 2π)` × `[-π/2, π/2]`.
    pub(crate) fn celestial(
        system: CoordinateSystem,
        (lon_name, lon): (&'static str, Radian),
        (lat_name, lat): (&'static str, Radian),
    ) -> Result<Self, RigelError> {
        check(system, lon_name, lon, &LONGITUDE_RANGE)?;
        check(system, lat_name, lat, &LATITUDE_RANGE)?;
        Ok(SphericalCoordinates { lon, lat })
    }

    /// Components already known to lie in their range (outputs of the closed-form
    /// conversions, which normalize longitudes and take latitudes from `asin`).
    pub(crate) fn normalized(lon: Radian, lat: Radian) -> Self {
        debug_assert!(LONGITUDE_RANGE.contains(lon), "longitude {lon} out of range");
        debug_assert!(LATITUDE_RANGE.contains(lat), "latitude {lat} out of range");
        SphericalCoordinates { lon, lat }
    }

    /// Components in radians whose ranges were checked by the caller.
    pub(crate) fn checked(lon: Radian, lat: Radian) -> Self {
        SphericalCoordinates { lon, lat }
    }

    pub(crate) fn lon(&self) -> Radian {
        self.lon
    }

    pub(crate) fn lat(&self) -> Radian {
        self.lat
    }

    pub(crate) fn lon_deg(&self) -> Degree {
        to_deg(self.lon)
    }

    pub(crate) fn lat_deg(&self) -> Degree {
        to_deg(self.lat)
    }
}

pub(crate) fn check(
    system: CoordinateSystem,
    component: &'static str,
    value: f64,
    range: &impl Interval,
) -> Result<(), RigelError> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(RigelError::InvalidCoordinate {
            system,
            component,
            value,
        })
    }
}
