mod common;

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rigel::angle::normalize_positive;
use rigel::celestial::Celestial;
use rigel::conversions::{
    CoordinateConversion, EclipticToEquatorialConversion, EquatorialToHorizontalConversion,
};
use rigel::coordinates::{EquatorialCoordinates, GeographicCoordinates, HorizontalCoordinates};
use rigel::models::{CelestialObjectModel, MoonModel, PlanetModel, SunModel};
use rigel::projection::StereographicProjection;
use rigel::time::{greenwich_sidereal_time, local_sidereal_time, ReferenceEpoch};

use common::{assert_horizontal_close, random_instant};

#[test]
fn test_moon_phase_always_in_unit_interval() {
    let mut rng = StdRng::seed_from_u64(42_u64);
    for _ in 0..10_000 {
        let when = random_instant(&mut rng);
        let d = ReferenceEpoch::J2010.days_until(&when);
        let moon = MoonModel
            .at(d, &EclipticToEquatorialConversion::new(&when))
            .unwrap();
        assert!((0.0..=1.0).contains(&moon.phase()));
        // between perigee and apogee
        assert!((0.0085..0.0100).contains(&moon.angular_size()));
    }
}

#[test]
fn test_sun_and_planets_stay_valid() {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    for _ in 0..1_000 {
        let when = random_instant(&mut rng);
        let d = ReferenceEpoch::J2010.days_until(&when);
        let conversion = EclipticToEquatorialConversion::new(&when);

        let sun = SunModel.at(d, &conversion).unwrap();
        // the Sun never leaves the ecliptic, |δ| <= ε
        assert!(sun.equatorial_position().dec().abs() <= conversion.obliquity() + 1e-12);
        assert!((0.0091..0.0095).contains(&sun.angular_size()));

        for model in PlanetModel::ALL.iter().filter(|&&m| m != PlanetModel::Earth) {
            let planet = model.at(d, &conversion).unwrap();
            assert!(planet.magnitude().is_finite());
            assert!(planet.angular_size() > 0.0);
        }
    }
}

#[test]
fn test_local_sidereal_time_is_greenwich_plus_longitude() {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    for _ in 0..1_000 {
        let when = random_instant(&mut rng);
        let location = GeographicCoordinates::of_deg(
            rng.random_range(-180.0..180.0),
            rng.random_range(-90.0..=90.0),
        )
        .unwrap();
        let lst = local_sidereal_time(&when, &location);
        assert!((0.0..std::f64::consts::TAU).contains(&lst));
        assert_eq!(
            lst,
            normalize_positive(greenwich_sidereal_time(&when) + location.lon())
        );
    }
}

#[test]
fn test_projection_round_trip() {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let random_horizontal = |rng: &mut StdRng| {
        HorizontalCoordinates::of(
            rng.random_range(0.0..std::f64::consts::TAU),
            rng.random_range(-1.0_f64..=1.0).asin(),
        )
        .unwrap()
    };

    let mut tested = 0;
    while tested < 10_000 {
        let center = random_horizontal(&mut rng);
        let h = random_horizontal(&mut rng);
        // the antipode of the center has no image
        if center.angular_distance_to(&h) > std::f64::consts::PI - 0.1 {
            continue;
        }
        let projection = StereographicProjection::new(&center);
        let back = projection.inverse_apply(&projection.apply(&h)).unwrap();
        assert_horizontal_close(&back, &h, 1e-9);
        tested += 1;
    }
}

#[test]
fn test_polaris_altitude_matches_latitude() {
    // The celestial pole stands at the observer's latitude
    let mut rng = StdRng::seed_from_u64(17_u64);
    let pole = EquatorialCoordinates::of(0.0, std::f64::consts::FRAC_PI_2).unwrap();
    for _ in 0..100 {
        let when = random_instant(&mut rng);
        let lat = rng.random_range(-89.0..89.0);
        let location = GeographicCoordinates::of_deg(rng.random_range(-180.0..180.0), lat).unwrap();
        let h = EquatorialToHorizontalConversion::new(&when, &location).apply(&pole);
        assert_abs_diff_eq!(h.alt_deg(), lat, epsilon = 1e-9);
        if lat > 1.0 {
            assert_abs_diff_eq!(common::longitude_gap(h.az(), 0.0), 0.0, epsilon = 1e-9);
        }
    }
}
