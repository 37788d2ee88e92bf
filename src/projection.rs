//! # Stereographic projection
//!
//! ## Overview
//!
//! Maps the celestial sphere, in horizontal coordinates, onto a plane tangent to
//! the sphere at a chosen center. The center maps to the origin, the horizon
//! and every other circle on the sphere map to circles (or lines) in the plane.
//!
//! With `(λ₀, φ₁)` the azimuth and altitude of the center, a point `(λ, φ)` maps to
//!
//! ```text
//! Δλ = λ − λ₀
//! k  = 1 / (1 + sin φ₁ sin φ + cos φ₁ cos φ cos Δλ)
//! x  = k cos φ sin Δλ
//! y  = k (sin φ cos φ₁ − cos φ sin φ₁ cos Δλ)
//! ```
//!
//! The antipode of the center has no image: its coordinates are infinite or NaN.
//!
//! A great circle distance `θ` from the center is drawn at radius `2 tan(θ/2)`,
//! the radius of a disk of angular diameter `s` is therefore `2 tan(s/4)`.

use std::fmt;

use nalgebra::Point2;

use crate::angle::{normalize_positive, UNIT_RANGE};
use crate::constants::Radian;
use crate::coordinates::HorizontalCoordinates;
use crate::interval::Interval;
use crate::rigel_errors::RigelError;

/// Stereographic projection centered on a point of the horizontal sphere.
#[derive(Debug, Clone)]
pub struct StereographicProjection {
    center: HorizontalCoordinates,
    sin_center_alt: f64,
    cos_center_alt: f64,
}

impl StereographicProjection {
    /// Build the projection centered at `center`.
    pub fn new(center: &HorizontalCoordinates) -> Self {
        let (sin_center_alt, cos_center_alt) = center.alt().sin_cos();
        StereographicProjection {
            center: *center,
            sin_center_alt,
            cos_center_alt,
        }
    }

    pub fn center(&self) -> &HorizontalCoordinates {
        &self.center
    }

    /// Project a point of the sphere onto the plane.
    ///
    /// Arguments
    /// ---------
    /// * `h`: point to project.
    ///
    /// Returns
    /// --------
    /// * Its planar image. The antipode of the center yields non-finite components.
    pub fn apply(&self, h: &HorizontalCoordinates) -> Point2<f64> {
        let (sin_alt, cos_alt) = h.alt().sin_cos();
        let (sin_dlon, cos_dlon) = (h.az() - self.center.az()).sin_cos();

        let k = 1.0
            / (1.0 + self.sin_center_alt * sin_alt + self.cos_center_alt * cos_alt * cos_dlon);

        Point2::new(
            k * cos_alt * sin_dlon,
            k * (sin_alt * self.cos_center_alt - cos_alt * self.sin_center_alt * cos_dlon),
        )
    }

    /// Point of the sphere whose image is `p`.
    ///
    /// ```text
    /// ρ     = |p|
    /// sin c = 2ρ / (ρ² + 1),   cos c = (1 − ρ²) / (ρ² + 1)
    /// λ     = atan2(x sin c, ρ cos φ₁ cos c − y sin φ₁ sin c) + λ₀
    /// φ     = asin(cos c sin φ₁ + y sin c cos φ₁ / ρ)
    /// ```
    ///
    /// The origin maps back to the center.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::NonFinitePoint`] if a component of `p` is infinite or NaN.
    pub fn inverse_apply(&self, p: &Point2<f64>) -> Result<HorizontalCoordinates, RigelError> {
        let (x, y) = (p.x, p.y);
        if !x.is_finite() || !y.is_finite() {
            return Err(RigelError::NonFinitePoint { x, y });
        }

        let rho_sq = x * x + y * y;
        if rho_sq == 0.0 {
            return Ok(self.center);
        }
        let rho = rho_sq.sqrt();
        let sin_c = 2.0 * rho / (rho_sq + 1.0);
        let cos_c = (1.0 - rho_sq) / (rho_sq + 1.0);

        let az = normalize_positive(
            (x * sin_c).atan2(
                rho * self.cos_center_alt * cos_c - y * self.sin_center_alt * sin_c,
            ) + self.center.az(),
        );
        let alt = UNIT_RANGE
            .clip(cos_c * self.sin_center_alt + y * sin_c * self.cos_center_alt / rho)
            .asin();

        Ok(HorizontalCoordinates::from_normalized(az, alt))
    }

    /// Planar radius of a disk of angular diameter `angular_size` centered on the
    /// projection center, `2 tan(angular_size / 4)`.
    pub fn apply_to_angle(&self, angular_size: Radian) -> f64 {
        2.0 * (angular_size / 4.0).tan()
    }

    /// Center of the circle onto which the parallel (circle of constant altitude)
    /// through `h` projects.
    ///
    /// Returns
    /// --------
    /// * `(0, cos φ₁ / (sin φ + sin φ₁))`, infinite when the parallel goes through
    ///   the antipode of the center and projects onto a line.
    pub fn circle_center_for_parallel(&self, h: &HorizontalCoordinates) -> Point2<f64> {
        Point2::new(
            0.0,
            self.cos_center_alt / (h.alt().sin() + self.sin_center_alt),
        )
    }

    /// Radius of the circle onto which the parallel through `h` projects,
    /// `cos φ / (sin φ + sin φ₁)`.
    pub fn circle_radius_for_parallel(&self, h: &HorizontalCoordinates) -> f64 {
        h.alt().cos() / (h.alt().sin() + self.sin_center_alt)
    }
}

impl fmt::Display for StereographicProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StereographicProjection centered at (az={:.4}°, alt={:.4}°)",
            self.center.az_deg(),
            self.center.alt_deg()
        )
    }
}
