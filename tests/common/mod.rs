#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use hifitime::{Epoch, TimeScale};
use rand::rngs::StdRng;
use rand::Rng;

use rigel::angle::normalize_positive;
use rigel::celestial::{Asterism, Star, StarCatalogue};
use rigel::coordinates::{EquatorialCoordinates, HorizontalCoordinates};

pub fn utc(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Epoch {
    Epoch::from_gregorian(year, month, day, hour, minute, second, 0, TimeScale::UTC)
}

/// Random instant between 1900 and 2100, millisecond resolution.
pub fn random_instant(rng: &mut StdRng) -> Epoch {
    let mjd = rng.random_range(15_020.0..88_069.0);
    Epoch::from_mjd_utc((mjd * 86_400_000.0_f64).round() / 86_400_000.0)
}

/// Difference between two longitudes, taking the wrap at 2π into account.
pub fn longitude_gap(a: f64, b: f64) -> f64 {
    let d = normalize_positive(a - b);
    d.min(std::f64::consts::TAU - d)
}

pub fn assert_equatorial_close(
    actual: &EquatorialCoordinates,
    expected: &EquatorialCoordinates,
    epsilon: f64,
) {
    assert_abs_diff_eq!(
        longitude_gap(actual.ra(), expected.ra()),
        0.0,
        epsilon = epsilon
    );
    assert_abs_diff_eq!(actual.dec(), expected.dec(), epsilon = epsilon);
}

pub fn assert_horizontal_close(
    actual: &HorizontalCoordinates,
    expected: &HorizontalCoordinates,
    epsilon: f64,
) {
    assert_abs_diff_eq!(actual.angular_distance_to(expected), 0.0, epsilon = epsilon);
}

/// Catalogue of `n` stars spread uniformly on the sphere, with one asterism
/// chaining the first (up to) ten stars.
pub fn random_catalogue(rng: &mut StdRng, n: usize) -> StarCatalogue {
    let mut builder = StarCatalogue::builder();
    for i in 0..n {
        let ra = rng.random_range(0.0..std::f64::consts::TAU);
        let dec = rng.random_range(-1.0_f64..=1.0).asin();
        let position = EquatorialCoordinates::of(ra, dec).unwrap();
        let star = Star::new(
            i as i64,
            format!("HIP {i}"),
            position,
            rng.random_range(-1.5..6.5),
            rng.random_range(-0.5..=5.5),
        )
        .unwrap();
        builder = builder.add_star(star);
    }
    if n > 0 {
        builder = builder.add_asterism(Asterism::new((0..n.min(10)).collect()).unwrap());
    }
    builder.build().unwrap()
}
