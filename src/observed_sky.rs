//! # Observed sky snapshot
//!
//! ## Overview
//!
//! An [`ObservedSky`] is the sky as seen by one observer at one instant, projected
//! on the plane of a [`StereographicProjection`]. It is computed once, in
//! [`ObservedSky::new`], and is immutable afterwards:
//!
//! 1. Every catalogue star goes through
//!    equatorial → horizontal ([`EquatorialToHorizontalConversion`]) → plane.
//!    Above [`SkyParams::parallel_threshold`] stars, this runs on the rayon pool;
//!    the output keeps catalogue order either way.
//! 2. The Sun, the Moon and the seven planets other than Earth are computed by their
//!    model at `D = J2010.days_until(when)` with the ecliptic → equatorial conversion
//!    of the same instant, then projected like the stars.
//!
//! The snapshot borrows the [`StarCatalogue`]; stars are never copied.
//!
//! Positions are [`nalgebra::Point2`] values in projection units, or flattened
//! `[x0, y0, x1, y1, …]` arrays for hosts drawing with vertex buffers.
//!
//! ## Nearest object
//!
//! [`ObservedSky::object_closest_to`] returns the object of any kind whose planar
//! position is nearest to a query point, within a maximum distance. Between
//! objects at exactly the same distance, the first in [`ObservedSky::objects`]
//! order wins.

use hifitime::Epoch;
use nalgebra::Point2;
use ordered_float::OrderedFloat;
use rayon::prelude::*;

use crate::celestial::{Asterism, Celestial, Moon, Planet, Star, StarCatalogue, Sun};
use crate::constants::Radian;
use crate::conversions::{
    CoordinateConversion, EclipticToEquatorialConversion, EquatorialToHorizontalConversion,
};
use crate::coordinates::{EquatorialCoordinates, GeographicCoordinates};
use crate::models::{CelestialObjectModel, MoonModel, PlanetModel, SunModel};
use crate::projection::StereographicProjection;
use crate::rigel_errors::RigelError;
use crate::sky_params::SkyParams;
use crate::time::ReferenceEpoch;

/// Any object of an [`ObservedSky`].
#[derive(Debug, Clone, Copy)]
pub enum SkyObject<'a> {
    Star(&'a Star),
    Planet(&'a Planet),
    Sun(&'a Sun),
    Moon(&'a Moon),
}

impl<'a> SkyObject<'a> {
    fn celestial(&self) -> &'a dyn Celestial {
        match *self {
            SkyObject::Star(star) => star,
            SkyObject::Planet(planet) => planet,
            SkyObject::Sun(sun) => sun,
            SkyObject::Moon(moon) => moon,
        }
    }

    pub fn name(&self) -> &'a str {
        self.celestial().name()
    }

    pub fn info(&self) -> String {
        self.celestial().info()
    }

    /// Angular size in radians.
    pub fn angular_size(&self) -> Radian {
        self.celestial().angular_size()
    }

    pub fn magnitude(&self) -> f64 {
        self.celestial().magnitude()
    }

    pub fn equatorial_position(&self) -> &'a EquatorialCoordinates {
        self.celestial().equatorial_position()
    }
}

/// Snapshot of the sky seen by an observer at an instant, projected on a plane.
#[derive(Debug, Clone)]
pub struct ObservedSky<'a> {
    catalogue: &'a StarCatalogue,
    star_points: Vec<Point2<f64>>,
    planets: Vec<Planet>,
    planet_points: Vec<Point2<f64>>,
    sun: Sun,
    sun_point: Point2<f64>,
    moon: Moon,
    moon_point: Point2<f64>,
}

impl<'a> ObservedSky<'a> {
    /// Compute the sky with the default [`SkyParams`].
    ///
    /// # See also
    /// * [`ObservedSky::with_params`]
    pub fn new(
        when: &Epoch,
        observer: &GeographicCoordinates,
        projection: &StereographicProjection,
        catalogue: &'a StarCatalogue,
    ) -> Result<Self, RigelError> {
        Self::with_params(when, observer, projection, catalogue, &SkyParams::default())
    }

    /// Compute the sky seen from `observer` at `when`.
    ///
    /// Arguments
    /// ---------
    /// * `when`: observation instant.
    /// * `observer`: geographic position of the observer.
    /// * `projection`: projection from the horizontal sphere to the plane.
    /// * `catalogue`: stars and asterisms, borrowed for the lifetime of the snapshot.
    /// * `params`: parallelism settings, see [`SkyParams`].
    ///
    /// Returns
    /// --------
    /// * The snapshot, with every star, planet, the Sun and the Moon projected.
    ///
    /// Errors
    /// ------
    /// * Propagates a [`RigelError`] from the Sun, Moon or planet models.
    pub fn with_params(
        when: &Epoch,
        observer: &GeographicCoordinates,
        projection: &StereographicProjection,
        catalogue: &'a StarCatalogue,
        params: &SkyParams,
    ) -> Result<Self, RigelError> {
        let days_since_j2010 = ReferenceEpoch::J2010.days_until(when);
        let ecliptic_to_equatorial = EclipticToEquatorialConversion::new(when);
        let equatorial_to_horizontal = EquatorialToHorizontalConversion::new(when, observer);

        let project = |position: &EquatorialCoordinates| {
            projection.apply(&equatorial_to_horizontal.apply(position))
        };

        let stars = catalogue.stars();
        let parallel = params.is_parallel_for(stars.len());
        let star_points: Vec<Point2<f64>> = if parallel {
            stars
                .par_iter()
                .with_min_len(params.min_chunk_len)
                .map(|star| project(star.equatorial_position()))
                .collect()
        } else {
            stars
                .iter()
                .map(|star| project(star.equatorial_position()))
                .collect()
        };

        let planets = PlanetModel::ALL
            .iter()
            .filter(|&&model| model != PlanetModel::Earth)
            .map(|model| model.at(days_since_j2010, &ecliptic_to_equatorial))
            .collect::<Result<Vec<_>, _>>()?;
        let planet_points = planets
            .iter()
            .map(|planet| project(planet.equatorial_position()))
            .collect();

        let sun = SunModel.at(days_since_j2010, &ecliptic_to_equatorial)?;
        let sun_point = project(sun.equatorial_position());
        let moon = MoonModel.at(days_since_j2010, &ecliptic_to_equatorial)?;
        let moon_point = project(moon.equatorial_position());

        log::debug!(
            "observed sky at {when} from {observer}: {} stars ({}), {} planets, D = {} d",
            stars.len(),
            if parallel { "parallel" } else { "sequential" },
            planets.len(),
            days_since_j2010,
        );
        log::trace!(
            "LST = {:.6} rad, obliquity = {:.9} rad, {}",
            equatorial_to_horizontal.local_sidereal_time(),
            ecliptic_to_equatorial.obliquity(),
            moon.info()
        );

        Ok(ObservedSky {
            catalogue,
            star_points,
            planets,
            planet_points,
            sun,
            sun_point,
            moon,
            moon_point,
        })
    }

    /// Catalogue stars, in catalogue order.
    pub fn stars(&self) -> &'a [Star] {
        self.catalogue.stars()
    }

    /// Projected star positions, parallel to [`stars`](Self::stars).
    pub fn star_points(&self) -> &[Point2<f64>] {
        &self.star_points
    }

    /// Projected star positions flattened as `[x0, y0, x1, y1, …]`.
    pub fn star_positions(&self) -> Vec<f64> {
        flatten(&self.star_points)
    }

    /// The seven planets other than Earth, in [`PlanetModel::ALL`] order.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Projected planet positions flattened as `[x0, y0, x1, y1, …]`, parallel to
    /// [`planets`](Self::planets).
    pub fn planet_positions(&self) -> Vec<f64> {
        flatten(&self.planet_points)
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn sun_position(&self) -> Point2<f64> {
        self.sun_point
    }

    pub fn moon(&self) -> &Moon {
        &self.moon
    }

    pub fn moon_position(&self) -> Point2<f64> {
        self.moon_point
    }

    pub fn asterisms(&self) -> &'a [Asterism] {
        self.catalogue.asterisms()
    }

    /// Star indices of the asterism at `index`, see [`StarCatalogue::asterism_indices`].
    pub fn asterism_indices(&self, index: usize) -> Option<&'a [usize]> {
        self.catalogue.asterism_indices(index)
    }

    /// Every object of the snapshot with its projected position: stars in catalogue
    /// order, then planets, the Sun and the Moon.
    pub fn objects(&self) -> impl Iterator<Item = (SkyObject<'_>, Point2<f64>)> + '_ {
        let stars = self
            .stars()
            .iter()
            .zip(&self.star_points)
            .map(|(star, &p)| (SkyObject::Star(star), p));
        let planets = self
            .planets
            .iter()
            .zip(&self.planet_points)
            .map(|(planet, &p)| (SkyObject::Planet(planet), p));

        stars.chain(planets).chain([
            (SkyObject::Sun(&self.sun), self.sun_point),
            (SkyObject::Moon(&self.moon), self.moon_point),
        ])
    }

    /// Projected position of `object`, `None` if it does not belong to this snapshot.
    ///
    /// Objects are matched by identity, not by value.
    pub fn position_of(&self, object: SkyObject<'_>) -> Option<Point2<f64>> {
        match object {
            SkyObject::Star(star) => self
                .stars()
                .iter()
                .position(|s| std::ptr::eq(s, star))
                .map(|i| self.star_points[i]),
            SkyObject::Planet(planet) => self
                .planets
                .iter()
                .position(|p| std::ptr::eq(p, planet))
                .map(|i| self.planet_points[i]),
            SkyObject::Sun(sun) => std::ptr::eq(sun, &self.sun).then_some(self.sun_point),
            SkyObject::Moon(moon) => std::ptr::eq(moon, &self.moon).then_some(self.moon_point),
        }
    }

    /// Object whose projected position is closest to `point`.
    ///
    /// Arguments
    /// ---------
    /// * `point`: query point in projection units.
    /// * `max_distance`: largest accepted Euclidean distance, inclusive. Use
    ///   `f64::INFINITY` for an unbounded search.
    ///
    /// Returns
    /// --------
    /// * The nearest object within `max_distance`, `None` if there is none.
    pub fn object_closest_to(
        &self,
        point: &Point2<f64>,
        max_distance: f64,
    ) -> Option<SkyObject<'_>> {
        self.objects()
            .map(|(object, p)| (object, nalgebra::distance(&p, point)))
            .filter(|&(_, d)| d <= max_distance)
            .min_by_key(|&(_, d)| OrderedFloat(d))
            .map(|(object, _)| object)
    }
}

fn flatten(points: &[Point2<f64>]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}
