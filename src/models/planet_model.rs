use std::fmt;

use nalgebra::Vector3;

use crate::angle::{normalize_positive, of_arcsec, of_deg};
use crate::celestial::Planet;
use crate::constants::{AstronomicalUnit, Days, Radian};
use crate::conversions::{CoordinateConversion, EclipticToEquatorialConversion};
use crate::coordinates::EclipticCoordinates;
use crate::models::{mean_motion, CelestialObjectModel};
use crate::rigel_errors::RigelError;

/// Orbital elements of a planet at J2010.
#[derive(Debug, Clone, Copy)]
struct OrbitalElements {
    name: &'static str,
    /// Orbital period, tropical years
    period: f64,
    /// Longitude at epoch ε, degrees
    longitude_at_epoch: f64,
    /// Longitude at perihelion ϖ, degrees
    longitude_at_perihelion: f64,
    eccentricity: f64,
    /// Semi-major axis, AU
    semi_major_axis: AstronomicalUnit,
    /// Inclination on the ecliptic, degrees
    inclination: f64,
    /// Longitude of the ascending node Ω, degrees
    ascending_node: f64,
    /// Angular size at 1 AU, arcseconds
    angular_size_at_1_au: f64,
    /// Magnitude at 1 AU
    magnitude_at_1_au: f64,
}

macro_rules! elements {
    (
        $name:literal, $tp:expr, $eps:expr, $varpi:expr, $e:expr,
        $a:expr, $i:expr, $node:expr, $theta:expr, $v:expr
    ) => {
        OrbitalElements {
            name: $name,
            period: $tp,
            longitude_at_epoch: $eps,
            longitude_at_perihelion: $varpi,
            eccentricity: $e,
            semi_major_axis: $a,
            inclination: $i,
            ascending_node: $node,
            angular_size_at_1_au: $theta,
            magnitude_at_1_au: $v,
        }
    };
}

// ---- Elements at J2010, in PlanetModel::ALL order
#[rustfmt::skip]
//               name         Tp          ε           ϖ           e         a         i         Ω          θ₀      V₀
const ELEMENTS: [OrbitalElements; 8] = [
    elements!("Mercury", 0.24085,   75.5671,    77.612,     0.205627, 0.387098, 7.0051,   48.449,    6.74,   -0.42),
    elements!("Venus",   0.615207,  272.30044,  131.54,     0.006812, 0.723329, 3.3947,   76.769,    16.92,  -4.40),
    elements!("Earth",   0.999996,  99.556772,  103.2055,   0.016671, 0.999985, 0.0,      0.0,       0.0,    0.0),
    elements!("Mars",    1.880765,  109.09646,  336.217,    0.093348, 1.523689, 1.8497,   49.632,    9.36,   -1.52),
    elements!("Jupiter", 11.857911, 337.917132, 14.6633,    0.048907, 5.20278,  1.3035,   100.595,   196.74, -9.40),
    elements!("Saturn",  29.310579, 172.398316, 89.567,     0.053853, 9.51134,  2.4873,   113.752,   165.60, -8.88),
    elements!("Uranus",  84.039492, 356.135400, 172.884833, 0.046321, 19.21814, 0.773059, 73.926961, 65.80,  -7.19),
    elements!("Neptune", 165.84539, 326.895127, 23.07,      0.010483, 30.1985,  1.7673,   131.879,   62.20,  -6.87),
];

/// The eight planets of the solar system.
///
/// Earth is part of the model because every geocentric position is the
/// difference of two heliocentric ones; it is never reported as a sky object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetModel {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Heliocentric position of a planet, in the ecliptic frame.
#[derive(Debug, Clone, Copy)]
struct HeliocentricPosition {
    /// Cartesian position, AU
    position: Vector3<f64>,
    /// Distance to the Sun r, AU
    radius: AstronomicalUnit,
    /// Heliocentric longitude l in the orbital plane
    longitude: Radian,
}

impl PlanetModel {
    /// All planets, ordered by distance to the Sun.
    pub const ALL: [PlanetModel; 8] = [
        PlanetModel::Mercury,
        PlanetModel::Venus,
        PlanetModel::Earth,
        PlanetModel::Mars,
        PlanetModel::Jupiter,
        PlanetModel::Saturn,
        PlanetModel::Uranus,
        PlanetModel::Neptune,
    ];

    fn elements(&self) -> &'static OrbitalElements {
        &ELEMENTS[*self as usize]
    }

    /// English name of the planet.
    pub fn name(&self) -> &'static str {
        self.elements().name
    }

    /// Heliocentric ecliptic position `days_since_j2010` days after J2010.
    ///
    /// ```text
    /// M  = 2π D / (365.242191 Tp) + ε − ϖ
    /// v  = M + 2e sin M
    /// r  = a (1 − e²) / (1 + e cos v)
    /// l  = v + ϖ
    /// ψ  = asin(sin(l − Ω) sin i)                      (heliocentric latitude)
    /// l' = atan2(sin(l − Ω) cos i, cos(l − Ω)) + Ω     (projected longitude)
    /// ```
    fn heliocentric_position(&self, days_since_j2010: Days) -> HeliocentricPosition {
        let el = self.elements();
        let e = el.eccentricity;
        let perihelion = of_deg(el.longitude_at_perihelion);
        let node = of_deg(el.ascending_node);

        let mean_anomaly =
            mean_motion(days_since_j2010, el.period) + of_deg(el.longitude_at_epoch) - perihelion;
        let true_anomaly = mean_anomaly + 2.0 * e * mean_anomaly.sin();
        let radius = el.semi_major_axis * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());
        let longitude = true_anomaly + perihelion;

        let (sin_i, cos_i) = of_deg(el.inclination).sin_cos();
        let (sin_u, cos_u) = (longitude - node).sin_cos();
        let latitude = (sin_u * sin_i).asin();
        let projected_longitude = (sin_u * cos_i).atan2(cos_u) + node;

        let (sin_psi, cos_psi) = latitude.sin_cos();
        let (sin_l, cos_l) = projected_longitude.sin_cos();
        HeliocentricPosition {
            position: radius * Vector3::new(cos_psi * cos_l, cos_psi * sin_l, sin_psi),
            radius,
            longitude,
        }
    }
}

impl fmt::Display for PlanetModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl CelestialObjectModel for PlanetModel {
    type Object = Planet;

    /// Geocentric planet seen from Earth.
    ///
    /// The geocentric ecliptic vector `g = planet − earth` gives the ecliptic
    /// coordinates and the distance `ρ = |g|`, from which
    ///
    /// ```text
    /// θ = θ₀ / ρ
    /// F = (1 + cos(λ − l)) / 2                (phase)
    /// m = V₀ + 5 log₁₀(r ρ / √F)
    /// ```
    ///
    /// Errors
    /// ------
    /// * [`RigelError::GeocentricEarth`] for [`PlanetModel::Earth`].
    fn at(
        &self,
        days_since_j2010: Days,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Planet, RigelError> {
        if *self == PlanetModel::Earth {
            return Err(RigelError::GeocentricEarth);
        }
        let planet = self.heliocentric_position(days_since_j2010);
        let earth = PlanetModel::Earth.heliocentric_position(days_since_j2010);

        let geocentric = planet.position - earth.position;
        let distance = geocentric.norm();

        let lon = normalize_positive(geocentric.y.atan2(geocentric.x));
        let lat = geocentric.z.atan2(geocentric.xy().norm());
        let ecliptic_position = EclipticCoordinates::from_normalized(lon, lat);

        let el = self.elements();
        let angular_size = of_arcsec(el.angular_size_at_1_au) / distance;
        let phase = (1.0 + (lon - planet.longitude).cos()) / 2.0;
        let magnitude =
            el.magnitude_at_1_au + 5.0 * (planet.radius * distance / phase.sqrt()).log10();

        Planet::new(
            self.name(),
            conversion.apply(&ecliptic_position),
            angular_size,
            magnitude,
        )
    }
}
