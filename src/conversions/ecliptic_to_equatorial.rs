use hifitime::Epoch;

use crate::angle::{normalize_positive, UNIT_RANGE};
use crate::constants::{Radian, RADEG, RADSEC};
use crate::conversions::CoordinateConversion;
use crate::coordinates::{EclipticCoordinates, EquatorialCoordinates};
use crate::interval::Interval;
use crate::polynomial::Polynomial;
use crate::time::ReferenceEpoch;

/// Coefficients of the mean obliquity, radians, highest degree first.
///
/// `ε₀ = 23° 26' 21.45"`, the higher terms are in arcseconds per Julian century power.
const OBLIQUITY_COEFFICIENTS: [f64; 4] = [
    0.00181 * RADSEC,
    -0.0006 * RADSEC,
    -46.815 * RADSEC,
    (23.0 + 26.0 / 60.0 + 21.45 / 3600.0) * RADEG,
];

/// Mean obliquity of the ecliptic as a polynomial in Julian centuries since J2000.
const OBLIQUITY: Polynomial = Polynomial::from_static(&OBLIQUITY_COEFFICIENTS);

/// Ecliptic → equatorial conversion at a fixed instant.
///
/// The conversion is a rotation by the obliquity ε around the equinox direction:
///
/// ```text
/// α = atan2(sin λ cos ε − tan β sin ε, cos λ)
/// δ = asin(sin β cos ε + cos β sin ε sin λ)
/// ```
///
/// evaluated in the product-to-sum form below, which avoids `tan β` at the ecliptic poles.
#[derive(Debug, Clone)]
pub struct EclipticToEquatorialConversion {
    obliquity: Radian,
    sin_obliquity: f64,
    cos_obliquity: f64,
}

impl EclipticToEquatorialConversion {
    /// Build the conversion for the instant `when`.
    ///
    /// Arguments
    /// ---------
    /// * `when`: instant at which the mean obliquity is evaluated.
    ///
    /// Returns
    /// --------
    /// * The conversion with `sin ε` and `cos ε` cached.
    pub fn new(when: &Epoch) -> Self {
        let centuries = ReferenceEpoch::J2000.julian_centuries_until(when);
        let obliquity = OBLIQUITY.at(centuries);
        EclipticToEquatorialConversion {
            obliquity,
            sin_obliquity: obliquity.sin(),
            cos_obliquity: obliquity.cos(),
        }
    }

    /// Mean obliquity of the ecliptic used by this conversion, in radians.
    pub fn obliquity(&self) -> Radian {
        self.obliquity
    }
}

impl CoordinateConversion<EclipticCoordinates, EquatorialCoordinates>
    for EclipticToEquatorialConversion
{
    fn apply(&self, ecl: &EclipticCoordinates) -> EquatorialCoordinates {
        let (lambda, beta) = (ecl.lon(), ecl.lat());

        // t1 = 2 sin β, t2 = 2 sin λ cos β
        let t1 = 2.0 * beta.sin();
        let t2 = (lambda - beta).sin() + (lambda + beta).sin();

        let ra = normalize_positive(
            (t2 * self.cos_obliquity - t1 * self.sin_obliquity)
                .atan2(2.0 * lambda.cos() * beta.cos()),
        );
        let dec = UNIT_RANGE
            .clip(0.5 * (t1 * self.cos_obliquity + t2 * self.sin_obliquity))
            .asin();

        EquatorialCoordinates::from_normalized(ra, dec)
    }
}
