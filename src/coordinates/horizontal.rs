use std::fmt;

use crate::angle::{of_deg, UNIT_RANGE};
use crate::constants::{Degree, Radian};
use crate::coordinates::{CoordinateSystem, SphericalCoordinates};
use crate::interval::Interval;
use crate::rigel_errors::RigelError;

/// Horizontal (alt-azimuth) coordinates of the observer: azimuth in `[0, 2π)`
/// measured from North towards East, altitude in `[-π/2, π/2]` above the horizon.
#[derive(Debug, Clone, Copy)]
pub struct HorizontalCoordinates(SphericalCoordinates);

impl HorizontalCoordinates {
    /// Build horizontal coordinates from an azimuth and an altitude in radians.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::InvalidCoordinate`] if `az ∉ [0, 2π)` or `alt ∉ [-π/2, π/2]`.
    pub fn of(az: Radian, alt: Radian) -> Result<Self, RigelError> {
        SphericalCoordinates::celestial(
            CoordinateSystem::Horizontal,
            ("azimuth", az),
            ("altitude", alt),
        )
        .map(HorizontalCoordinates)
    }

    /// Same as [`of`](Self::of) with both components in degrees.
    pub fn of_deg(az: Degree, alt: Degree) -> Result<Self, RigelError> {
        Self::of(of_deg(az), of_deg(alt))
    }

    pub(crate) fn from_normalized(az: Radian, alt: Radian) -> Self {
        HorizontalCoordinates(SphericalCoordinates::normalized(az, alt))
    }

    pub fn az(&self) -> Radian {
        self.0.lon()
    }

    pub fn az_deg(&self) -> Degree {
        self.0.lon_deg()
    }

    pub fn alt(&self) -> Radian {
        self.0.lat()
    }

    pub fn alt_deg(&self) -> Degree {
        self.0.lat_deg()
    }

    /// Compass octant of the azimuth, built from the four cardinal labels.
    ///
    /// Each octant spans 45° centered on its direction, so North covers
    /// `[337.5°, 22.5°)`, North-East `[22.5°, 67.5°)`, and so on.
    ///
    /// Arguments
    /// ---------
    /// * `n`, `e`, `s`, `w`: labels of the cardinal points, e.g. `"N"`, `"E"`, `"S"`, `"W"`.
    ///
    /// Returns
    /// --------
    /// * The octant label, a single cardinal (`"N"`) or a North/South label followed
    ///   by an East/West label (`"NE"`, `"SW"`).
    pub fn az_octant_name(&self, n: &str, e: &str, s: &str, w: &str) -> String {
        let octant = ((self.az_deg() + 22.5) / 45.0).floor() as usize % 8;
        match octant {
            0 => n.to_string(),
            1 => format!("{n}{e}"),
            2 => e.to_string(),
            3 => format!("{s}{e}"),
            4 => s.to_string(),
            5 => format!("{s}{w}"),
            6 => w.to_string(),
            _ => format!("{n}{w}"),
        }
    }

    /// Great-circle distance to `other`, in radians in `[0, π]`.
    ///
    /// Haversine form, accurate for nearby points:
    ///
    /// ```text
    /// d = 2 asin(√(sin²((h2 − h1)/2) + cos h1 cos h2 sin²((A2 − A1)/2)))
    /// ```
    pub fn angular_distance_to(&self, other: &HorizontalCoordinates) -> Radian {
        let half_dalt = ((other.alt() - self.alt()) / 2.0).sin();
        let half_daz = ((other.az() - self.az()) / 2.0).sin();
        let hav = half_dalt * half_dalt
            + self.alt().cos() * other.alt().cos() * half_daz * half_daz;
        2.0 * UNIT_RANGE.clip(hav.sqrt()).asin()
    }
}

impl fmt::Display for HorizontalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(az={:.4}°, alt={:.4}°)", self.az_deg(), self.alt_deg())
    }
}
