use crate::angle::{normalize_positive, of_deg};
use crate::celestial::Moon;
use crate::constants::Days;
use crate::conversions::{CoordinateConversion, EclipticToEquatorialConversion};
use crate::coordinates::EclipticCoordinates;
use crate::interval::{ClosedInterval, Interval};
use crate::models::{CelestialObjectModel, SunModel};
use crate::rigel_errors::RigelError;

// ---- Elements of the lunar orbit at J2010, degrees
/// Mean longitude at epoch l₀
const MEAN_LONGITUDE_AT_EPOCH: f64 = 91.929336;
/// Mean longitude of the perigee at epoch P₀
const PERIGEE_LONGITUDE_AT_EPOCH: f64 = 130.143076;
/// Mean longitude of the ascending node at epoch N₀
const NODE_LONGITUDE_AT_EPOCH: f64 = 291.682547;
/// Inclination of the orbit on the ecliptic
const INCLINATION: f64 = 5.145396;
/// Eccentricity of the orbit
const ECCENTRICITY: f64 = 0.0549;
/// Angular diameter at the semi-major axis distance
const ANGULAR_SIZE_AT_SEMI_MAJOR_AXIS: f64 = 0.5181;

// ---- Daily motions, degrees per day
const MEAN_LONGITUDE_RATE: f64 = 13.1763966;
const PERIGEE_RATE: f64 = 0.1114041;
const NODE_RATE: f64 = 0.0529539;

// ---- Amplitudes of the periodic corrections, degrees
const EVECTION: f64 = 1.2739;
const ANNUAL_EQUATION: f64 = 0.1858;
const THIRD_CORRECTION: f64 = 0.37;
const EQUATION_OF_CENTRE: f64 = 6.2886;
const FOURTH_CORRECTION: f64 = 0.214;
const VARIATION: f64 = 0.6583;
const NODE_CORRECTION: f64 = 0.16;

/// Visual magnitude reported for the Moon
const MOON_MAGNITUDE: f64 = 0.0;

const PHASE_RANGE: ClosedInterval = ClosedInterval::from_const(0.0, 1.0);

/// Apparent position of the Moon, a Keplerian orbit perturbed by the Sun.
///
/// The mean orbital longitude and anomaly are corrected successively for the
/// evection, the annual equation, the equation of the centre and the variation.
/// The true orbital longitude `l''` is then projected on the ecliptic through the
/// corrected ascending node.
///
/// The phase is the illuminated fraction of the disk:
///
/// ```text
/// F = (1 − cos(l'' − λ☉)) / 2
/// ```
///
/// # See also
/// * [`SunModel`] – evaluated at the same instant for λ☉ and M☉
#[derive(Debug, Clone, Copy, Default)]
pub struct MoonModel;

impl CelestialObjectModel for MoonModel {
    type Object = Moon;

    fn at(
        &self,
        days_since_j2010: Days,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Moon, RigelError> {
        let d = days_since_j2010;
        let sun_longitude = SunModel.ecliptic_longitude(d);
        let sun_anomaly_sin = SunModel.mean_anomaly(d).sin();

        // Mean orbital longitude and anomaly
        let mean_longitude = of_deg(MEAN_LONGITUDE_RATE) * d + of_deg(MEAN_LONGITUDE_AT_EPOCH);
        let mean_anomaly =
            mean_longitude - of_deg(PERIGEE_RATE) * d - of_deg(PERIGEE_LONGITUDE_AT_EPOCH);
        let node = of_deg(NODE_LONGITUDE_AT_EPOCH) - of_deg(NODE_RATE) * d;

        let evection =
            of_deg(EVECTION) * (2.0 * (mean_longitude - sun_longitude) - mean_anomaly).sin();
        let annual_equation = of_deg(ANNUAL_EQUATION) * sun_anomaly_sin;
        let a3 = of_deg(THIRD_CORRECTION) * sun_anomaly_sin;

        let corrected_anomaly = mean_anomaly + evection - annual_equation - a3;
        let equation_of_centre = of_deg(EQUATION_OF_CENTRE) * corrected_anomaly.sin();
        let a4 = of_deg(FOURTH_CORRECTION) * (2.0 * corrected_anomaly).sin();

        let corrected_longitude =
            mean_longitude + evection + equation_of_centre - annual_equation + a4;
        let variation = of_deg(VARIATION) * (2.0 * (corrected_longitude - sun_longitude)).sin();
        let true_longitude = corrected_longitude + variation;

        let corrected_node = node - of_deg(NODE_CORRECTION) * sun_anomaly_sin;

        // Projection on the ecliptic
        let (sin_i, cos_i) = of_deg(INCLINATION).sin_cos();
        let (sin_u, cos_u) = (true_longitude - corrected_node).sin_cos();
        let lon = normalize_positive((sin_u * cos_i).atan2(cos_u) + corrected_node);
        let lat = (sin_u * sin_i).asin();
        let ecliptic_position = EclipticCoordinates::from_normalized(lon, lat);

        let angular_size = of_deg(ANGULAR_SIZE_AT_SEMI_MAJOR_AXIS)
            * (1.0 + ECCENTRICITY * (corrected_anomaly + equation_of_centre).cos())
            / (1.0 - ECCENTRICITY * ECCENTRICITY);

        let phase = PHASE_RANGE.clip((1.0 - (true_longitude - sun_longitude).cos()) / 2.0);

        Moon::new(
            conversion.apply(&ecliptic_position),
            angular_size,
            MOON_MAGNITUDE,
            phase,
        )
    }
}

#[cfg(test)]
mod moon_model_test {
    use super::*;
    use crate::celestial::Celestial;
    use crate::time::ReferenceEpoch;
    use approx::assert_abs_diff_eq;
    use hifitime::{Epoch, TimeScale};

    #[test]
    fn test_moon_2003_09_01() {
        let when = Epoch::from_gregorian(2003, 9, 1, 0, 0, 0, 0, TimeScale::UTC);
        let d = ReferenceEpoch::J2010.days_until(&when);
        assert_eq!(d, -2313.0);

        let moon = MoonModel
            .at(d, &EclipticToEquatorialConversion::new(&when))
            .unwrap();
        assert_abs_diff_eq!(moon.equatorial_position().ra_hr(), 14.211456462003504, epsilon = 1e-9);
        assert_abs_diff_eq!(
            moon.equatorial_position().dec_deg(),
            -11.52457128899373,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(moon.phase(), 0.2250060814775917, epsilon = 1e-9);
        assert_abs_diff_eq!(moon.angular_size(), 0.00954382138519668, epsilon = 1e-12);
        assert_eq!(moon.info(), "Moon (22.5%)");
    }
}
