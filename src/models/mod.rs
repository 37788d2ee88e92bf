//! # Sun, Moon and planet position models
//!
//! ## Overview
//!
//! Each model computes one celestial object from two inputs:
//!
//! - `days_since_j2010`: signed fractional days elapsed since
//!   [`ReferenceEpoch::J2010`](crate::time::ReferenceEpoch::J2010),
//! - the [`EclipticToEquatorialConversion`] valid at the same instant.
//!
//! Models are stateless. Their orbital elements are compile-time tables taken
//! from Duffett-Smith & Zwart, *Practical Astronomy with your Calculator or
//! Spreadsheet* (4th ed.), epoch 2010.0. Positions are low-precision
//! (a few arcminutes) and do not account for parallax, nutation or aberration.
//!
//! | Model            | Object                            |
//! |------------------|-----------------------------------|
//! | [`SunModel`]     | [`Sun`](crate::celestial::Sun)    |
//! | [`MoonModel`]    | [`Moon`](crate::celestial::Moon)  |
//! | [`PlanetModel`]  | [`Planet`](crate::celestial::Planet) |
//!
//! All computations are closed-form; the only failure mode is the construction of
//! the resulting object.

use crate::constants::{Days, Radian, DPI, TROPICAL_YEAR};
use crate::conversions::EclipticToEquatorialConversion;
use crate::rigel_errors::RigelError;

pub mod moon_model;
pub mod planet_model;
pub mod sun_model;

pub use moon_model::MoonModel;
pub use planet_model::PlanetModel;
pub use sun_model::SunModel;

/// A model producing one celestial object for a given instant.
pub trait CelestialObjectModel {
    type Object;

    /// Compute the object `days_since_j2010` days after J2010.
    ///
    /// Arguments
    /// ---------
    /// * `days_since_j2010`: signed days since J2010, see
    ///   [`ReferenceEpoch::days_until`](crate::time::ReferenceEpoch::days_until).
    /// * `conversion`: ecliptic → equatorial conversion at the same instant.
    ///
    /// Errors
    /// ------
    /// * Propagates the object constructor error, which a model within its
    ///   validity range never triggers.
    fn at(
        &self,
        days_since_j2010: Days,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Self::Object, RigelError>;
}

/// Mean angular motion of a body of period `period_years` (tropical years) over `days`.
pub(crate) fn mean_motion(days: Days, period_years: f64) -> Radian {
    DPI / TROPICAL_YEAR * days / period_years
}
