use thiserror::Error;

use crate::coordinates::CoordinateSystem;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RigelError {
    #[error("Invalid {component} for {system} coordinates: {value}")]
    InvalidCoordinate {
        system: CoordinateSystem,
        component: &'static str,
        value: f64,
    },

    #[error("Invalid interval bounds: low = {low}, high = {high}")]
    InvalidInterval { low: f64, high: f64 },

    #[error("Invalid degrees-minutes-seconds angle: {deg}° {min}' {sec}\"")]
    InvalidDms { deg: i32, min: i32, sec: f64 },

    #[error("A polynomial needs at least one coefficient")]
    EmptyPolynomial,

    #[error("The leading coefficient of a polynomial of degree {0} cannot be zero")]
    ZeroLeadingCoefficient(usize),

    #[error("Celestial object name cannot be empty")]
    EmptyName,

    #[error("Angular size must be non-negative, got {0}")]
    NegativeAngularSize(f64),

    #[error("Moon phase must lie in [0, 1], got {0}")]
    InvalidMoonPhase(f64),

    #[error("Star color index must lie in [-0.5, 5.5], got {0}")]
    InvalidColorIndex(f64),

    #[error("Hipparcos identifier must be non-negative, got {0}")]
    InvalidHipparcosId(i64),

    #[error("An asterism needs at least one star")]
    EmptyAsterism,

    #[error("Asterism references star index {index} but the catalogue holds {len} stars")]
    AsterismIndexOutOfRange { index: usize, len: usize },

    #[error("Earth has no position in the geocentric sky")]
    GeocentricEarth,

    #[error("Planar point must be finite, got ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },

    #[error("Invalid sky parameters: {0}")]
    InvalidSkyParams(String),
}
