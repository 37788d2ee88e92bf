use crate::angle::{normalize_positive, of_deg};
use crate::celestial::Sun;
use crate::constants::{Days, Radian};
use crate::conversions::{CoordinateConversion, EclipticToEquatorialConversion};
use crate::coordinates::EclipticCoordinates;
use crate::models::{mean_motion, CelestialObjectModel};
use crate::rigel_errors::RigelError;

// ---- Elements of the apparent solar orbit at J2010
/// Ecliptic longitude at epoch ε_g
const LONGITUDE_AT_EPOCH: f64 = 279.557208;
/// Ecliptic longitude at perigee ϖ_g
const LONGITUDE_AT_PERIGEE: f64 = 283.112438;
/// Eccentricity of the apparent orbit
pub(crate) const ECCENTRICITY: f64 = 0.016705;
/// Angular diameter at one astronomical unit, degrees
const ANGULAR_SIZE_AT_1_AU: f64 = 0.533128;

/// Apparent position of the Sun, a Keplerian orbit of the Sun around the Earth.
///
/// ```text
/// M = 2π D / 365.242191 + ε_g − ϖ_g        (mean anomaly)
/// v = M + 2e sin M                         (true anomaly, first order)
/// λ = v + ϖ_g,  β = 0
/// θ = θ₀ (1 + e cos v) / (1 − e²)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SunModel;

impl SunModel {
    /// Mean anomaly `M` at `days_since_j2010`, radians, not normalized.
    pub fn mean_anomaly(&self, days_since_j2010: Days) -> Radian {
        mean_motion(days_since_j2010, 1.0) + of_deg(LONGITUDE_AT_EPOCH)
            - of_deg(LONGITUDE_AT_PERIGEE)
    }

    /// True anomaly `v` for a mean anomaly `M`.
    pub(crate) fn true_anomaly(&self, mean_anomaly: Radian) -> Radian {
        mean_anomaly + 2.0 * ECCENTRICITY * mean_anomaly.sin()
    }

    /// Geocentric ecliptic longitude λ at `days_since_j2010`, in `[0, 2π)`.
    pub fn ecliptic_longitude(&self, days_since_j2010: Days) -> Radian {
        let v = self.true_anomaly(self.mean_anomaly(days_since_j2010));
        normalize_positive(v + of_deg(LONGITUDE_AT_PERIGEE))
    }
}

impl CelestialObjectModel for SunModel {
    type Object = Sun;

    fn at(
        &self,
        days_since_j2010: Days,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Sun, RigelError> {
        let mean_anomaly = self.mean_anomaly(days_since_j2010);
        let true_anomaly = self.true_anomaly(mean_anomaly);

        let ecliptic_position = EclipticCoordinates::from_normalized(
            normalize_positive(true_anomaly + of_deg(LONGITUDE_AT_PERIGEE)),
            0.0,
        );
        let angular_size = of_deg(ANGULAR_SIZE_AT_1_AU)
            * (1.0 + ECCENTRICITY * true_anomaly.cos())
            / (1.0 - ECCENTRICITY * ECCENTRICITY);

        Sun::new(
            ecliptic_position,
            conversion.apply(&ecliptic_position),
            angular_size,
            mean_anomaly,
        )
    }
}

#[cfg(test)]
mod sun_model_test {
    use super::*;
    use crate::celestial::Celestial;
    use approx::assert_abs_diff_eq;
    use hifitime::{Epoch, TimeScale};

    #[test]
    fn test_sun_2003_07_27() {
        let when = Epoch::from_gregorian(2003, 7, 27, 0, 0, 0, 0, TimeScale::UTC);
        let conversion = EclipticToEquatorialConversion::new(&when);
        let sun = SunModel.at(-2349.0, &conversion).unwrap();

        assert_abs_diff_eq!(sun.equatorial_position().ra_hr(), 8.392682808297804, epsilon = 1e-9);
        assert_abs_diff_eq!(sun.equatorial_position().dec_deg(), 19.35288373097352, epsilon = 1e-9);
        assert_abs_diff_eq!(sun.ecliptic_position().lon_deg(), 123.58060053153356, epsilon = 1e-9);
        assert_eq!(sun.ecliptic_position().lat(), 0.0);
        assert_abs_diff_eq!(sun.angular_size(), 0.009161771537464213, epsilon = 1e-12);
        assert_abs_diff_eq!(sun.mean_anomaly(), -40.4714080139649, epsilon = 1e-9);
        assert_eq!(sun.magnitude(), -26.7);
        assert_eq!(sun.name(), "Sun");
    }

    #[test]
    fn test_ecliptic_longitude_matches_object() {
        let when = Epoch::from_gregorian(2003, 7, 27, 0, 0, 0, 0, TimeScale::UTC);
        let conversion = EclipticToEquatorialConversion::new(&when);
        for d in [-5000.0, -2349.0, 0.0, 123.456, 9000.0] {
            let sun = SunModel.at(d, &conversion).unwrap();
            assert_eq!(SunModel.ecliptic_longitude(d), sun.ecliptic_position().lon());
        }
    }
}
