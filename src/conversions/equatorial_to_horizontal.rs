use hifitime::Epoch;

use crate::angle::{normalize_positive, UNIT_RANGE};
use crate::constants::{Radian, POLE_EPSILON};
use crate::conversions::CoordinateConversion;
use crate::coordinates::{EquatorialCoordinates, GeographicCoordinates, HorizontalCoordinates};
use crate::interval::Interval;
use crate::time::local_sidereal_time;

/// Equatorial → horizontal conversion for one observer at a fixed instant.
///
/// With `H = LST − α` the hour angle and φ the observer latitude:
///
/// ```text
/// sin h = sin δ sin φ + cos φ cos δ cos H
/// A     = atan2(−cos φ cos δ sin H, sin δ − sin φ sin h)
/// ```
///
/// Azimuth is measured from North towards East.
///
/// At the poles `cos φ` vanishes and the azimuth is undefined. The cached `cos φ`
/// is therefore kept at least [`POLE_EPSILON`] in magnitude, which trades a
/// negligible error on the altitude for a well-defined azimuth.
#[derive(Debug, Clone)]
pub struct EquatorialToHorizontalConversion {
    sin_lat: f64,
    cos_lat: f64,
    local_sidereal_time: Radian,
}

impl EquatorialToHorizontalConversion {
    /// Build the conversion for an observer at `location` and the instant `when`.
    ///
    /// Arguments
    /// ---------
    /// * `when`: observation instant.
    /// * `location`: geographic position of the observer.
    ///
    /// Returns
    /// --------
    /// * The conversion with `sin φ`, the clamped `cos φ` and the local sidereal time cached.
    ///
    /// # See also
    /// * [`local_sidereal_time`]
    pub fn new(when: &Epoch, location: &GeographicCoordinates) -> Self {
        EquatorialToHorizontalConversion {
            sin_lat: location.lat().sin(),
            cos_lat: epsilon_clamp(location.lat().cos()),
            local_sidereal_time: local_sidereal_time(when, location),
        }
    }

    /// Local sidereal time of the observer, in radians in `[0, 2π)`.
    pub fn local_sidereal_time(&self) -> Radian {
        self.local_sidereal_time
    }
}

/// Replace `|v| < POLE_EPSILON` by `±POLE_EPSILON`, keeping the sign (`+` for zero).
fn epsilon_clamp(v: f64) -> f64 {
    if v.abs() >= POLE_EPSILON {
        v
    } else if v < 0.0 {
        -POLE_EPSILON
    } else {
        POLE_EPSILON
    }
}

impl CoordinateConversion<EquatorialCoordinates, HorizontalCoordinates>
    for EquatorialToHorizontalConversion
{
    fn apply(&self, eq: &EquatorialCoordinates) -> HorizontalCoordinates {
        let hour_angle = self.local_sidereal_time - eq.ra();
        let (sin_dec, cos_dec) = eq.dec().sin_cos();

        let sin_alt =
            UNIT_RANGE.clip(sin_dec * self.sin_lat + self.cos_lat * cos_dec * hour_angle.cos());

        let az = normalize_positive(
            (-self.cos_lat * cos_dec * hour_angle.sin()).atan2(sin_dec - self.sin_lat * sin_alt),
        );

        HorizontalCoordinates::from_normalized(az, sin_alt.asin())
    }
}
