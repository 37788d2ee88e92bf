mod common;

use approx::assert_abs_diff_eq;
use hifitime::Epoch;
use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rigel::celestial::{Celestial, StarCatalogue};
use rigel::coordinates::{GeographicCoordinates, HorizontalCoordinates};
use rigel::models::PlanetModel;
use rigel::observed_sky::{ObservedSky, SkyObject};
use rigel::projection::StereographicProjection;
use rigel::sky_params::SkyParams;

use common::{random_catalogue, random_instant, utc};

fn epfl() -> GeographicCoordinates {
    GeographicCoordinates::of_deg(6.57, 46.52).unwrap()
}

fn south_projection() -> StereographicProjection {
    StereographicProjection::new(&HorizontalCoordinates::of_deg(180.0, 43.0).unwrap())
}

fn observe<'a>(when: &Epoch, catalogue: &'a StarCatalogue) -> ObservedSky<'a> {
    ObservedSky::new(when, &epfl(), &south_projection(), catalogue).unwrap()
}

#[test]
fn test_sun_position_2003_07_27() {
    let mut rng = StdRng::seed_from_u64(42_u64);
    let catalogue = random_catalogue(&mut rng, 10);
    let sky = observe(&utc(2003, 7, 27, 0, 0, 0), &catalogue);

    let sun = sky.sun().equatorial_position();
    assert_abs_diff_eq!(sun.ra_hr(), 8.392682808297804, epsilon = 1e-9);
    assert_abs_diff_eq!(sun.dec_deg(), 19.35288373097352, epsilon = 1e-9);
}

#[test]
fn test_planets_exclude_earth() {
    let mut rng = StdRng::seed_from_u64(42_u64);
    let catalogue = random_catalogue(&mut rng, 0);
    for _ in 0..50 {
        let sky = observe(&random_instant(&mut rng), &catalogue);
        assert_eq!(sky.planets().len(), PlanetModel::ALL.len() - 1);
        assert_eq!(sky.planet_positions().len(), 2 * sky.planets().len());
        assert!(sky.planets().iter().all(|p| p.name() != "Earth"));

        let names: Vec<_> = sky.planets().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]);
        assert!(sky.planets().iter().all(|p| p.magnitude().is_finite()));
    }
}

#[test]
fn test_parallel_and_sequential_agree() {
    let mut rng = StdRng::seed_from_u64(7_u64);
    let catalogue = random_catalogue(&mut rng, 5_000);
    let when = utc(2024, 8, 12, 23, 30, 0);

    let sequential = SkyParams::builder()
        .parallel_threshold(usize::MAX)
        .build()
        .unwrap();
    let parallel = SkyParams::builder()
        .parallel_threshold(0)
        .min_chunk_len(64)
        .build()
        .unwrap();

    let a = ObservedSky::with_params(&when, &epfl(), &south_projection(), &catalogue, &sequential)
        .unwrap();
    let b = ObservedSky::with_params(&when, &epfl(), &south_projection(), &catalogue, &parallel)
        .unwrap();

    assert_eq!(a.star_positions().len(), 2 * catalogue.stars().len());
    assert_eq!(a.star_positions(), b.star_positions());
}

#[test]
fn test_star_positions_follow_catalogue_order() {
    let mut rng = StdRng::seed_from_u64(3_u64);
    let catalogue = random_catalogue(&mut rng, 100);
    let sky = observe(&utc(2024, 1, 1, 0, 0, 0), &catalogue);

    let flat = sky.star_positions();
    for (i, (star, point)) in sky.stars().iter().zip(sky.star_points()).enumerate() {
        assert_eq!(flat[2 * i], point.x);
        assert_eq!(flat[2 * i + 1], point.y);
        assert_eq!(sky.position_of(SkyObject::Star(star)), Some(*point));
    }
}

#[test]
fn test_closest_to_unbounded_is_global_nearest() {
    let mut rng = StdRng::seed_from_u64(11_u64);
    let catalogue = random_catalogue(&mut rng, 300);
    let sky = observe(&utc(2015, 3, 20, 21, 0, 0), &catalogue);

    for _ in 0..200 {
        let query = Point2::new(rng_coordinate(&mut rng), rng_coordinate(&mut rng));
        let found = sky.object_closest_to(&query, f64::INFINITY).unwrap();
        let found_distance = nalgebra::distance(&sky.position_of(found).unwrap(), &query);

        let best = sky
            .objects()
            .map(|(_, p)| nalgebra::distance(&p, &query))
            .fold(f64::INFINITY, f64::min);
        assert_eq!(found_distance, best);
    }
}

#[test]
fn test_closest_to_with_zero_distance_returns_the_star() {
    let mut rng = StdRng::seed_from_u64(5_u64);
    let catalogue = random_catalogue(&mut rng, 200);
    let sky = observe(&utc(2015, 3, 20, 21, 0, 0), &catalogue);

    for (star, point) in sky.stars().iter().zip(sky.star_points()).step_by(7) {
        let found = sky.object_closest_to(point, 0.0).unwrap();
        assert_eq!(found.name(), star.name());
        assert!(matches!(found, SkyObject::Star(s) if std::ptr::eq(s, star)));
    }
    assert!(sky.object_closest_to(&Point2::new(1e9, 1e9), 0.0).is_none());
}

#[test]
fn test_moon_info_reports_phase() {
    let catalogue = random_catalogue(&mut StdRng::seed_from_u64(1_u64), 0);
    let sky = observe(&utc(2003, 9, 1, 0, 0, 0), &catalogue);
    assert_eq!(sky.moon().info(), "Moon (22.5%)");
    assert_eq!(SkyObject::Moon(sky.moon()).info(), "Moon (22.5%)");
    assert_eq!(SkyObject::Sun(sky.sun()).magnitude(), -26.7);
}

fn rng_coordinate(rng: &mut StdRng) -> f64 {
    use rand::Rng;
    rng.random_range(-3.0..3.0)
}
