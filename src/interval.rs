//! # Closed and right-open intervals
//!
//! Intervals are used to validate coordinate components and to reduce angles
//! into their canonical range.
//!
//! - [`ClosedInterval`] — `[low, high]`, used for latitudes/declinations and
//!   for clipping values.
//! - [`RightOpenInterval`] — `[low, high)`, used for longitudes/right ascensions
//!   and for the modular [`reduce`](RightOpenInterval::reduce) operation.
//!
//! Both types are immutable and validated at construction: `low < high` must hold.
//! They deliberately do not implement `PartialEq`, comparing floating-point bounds
//! exactly is never what a caller wants.

use std::cmp::Ordering;
use std::fmt;

use crate::rigel_errors::RigelError;

/// Common read-only behaviour of every interval kind.
pub trait Interval {
    /// Lower bound
    fn low(&self) -> f64;

    /// Upper bound
    fn high(&self) -> f64;

    /// Return `true` if `v` belongs to the interval.
    fn contains(&self, v: f64) -> bool;

    /// Length of the interval, `high - low`.
    fn size(&self) -> f64 {
        self.high() - self.low()
    }

    /// Clip `v` into `[low, high]`.
    ///
    /// Returns `v` itself when it is already contained, otherwise the nearer bound.
    /// For a right-open interval, values at or above `high` are clipped to `high`,
    /// the same as the closed case: clipping is a clamp, not a reduction.
    /// NaN has no nearer bound and is clipped to `low`.
    fn clip(&self, v: f64) -> f64 {
        if v.is_nan() || v <= self.low() {
            self.low()
        } else if v >= self.high() {
            self.high()
        } else {
            v
        }
    }
}

fn check_bounds(low: f64, high: f64) -> Result<(), RigelError> {
    // NaN bounds are not comparable and fall through to the error
    if low.partial_cmp(&high) != Some(Ordering::Less) || !low.is_finite() || !high.is_finite() {
        return Err(RigelError::InvalidInterval { low, high });
    }
    Ok(())
}

/// Closed interval `[low, high]`.
#[derive(Debug, Clone, Copy)]
pub struct ClosedInterval {
    low: f64,
    high: f64,
}

impl ClosedInterval {
    /// Build `[low, high]`.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::InvalidInterval`] unless `low < high` and both bounds are finite.
    pub fn of(low: f64, high: f64) -> Result<Self, RigelError> {
        check_bounds(low, high)?;
        Ok(ClosedInterval { low, high })
    }

    /// Build `[-size/2, size/2]`.
    pub fn symmetric(size: f64) -> Result<Self, RigelError> {
        Self::of(-size / 2.0, size / 2.0)
    }

    /// Interval with compile-time bounds, `low < high` is the caller's contract.
    pub(crate) const fn from_const(low: f64, high: f64) -> Self {
        ClosedInterval { low, high }
    }
}

impl Interval for ClosedInterval {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn contains(&self, v: f64) -> bool {
        self.low <= v && v <= self.high
    }
}

impl fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.low, self.high)
    }
}

/// Right-open interval `[low, high)`.
#[derive(Debug, Clone, Copy)]
pub struct RightOpenInterval {
    low: f64,
    high: f64,
}

impl RightOpenInterval {
    /// Build `[low, high)`.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::InvalidInterval`] unless `low < high` and both bounds are finite.
    pub fn of(low: f64, high: f64) -> Result<Self, RigelError> {
        check_bounds(low, high)?;
        Ok(RightOpenInterval { low, high })
    }

    /// Build `[-size/2, size/2)`.
    pub fn symmetric(size: f64) -> Result<Self, RigelError> {
        Self::of(-size / 2.0, size / 2.0)
    }

    /// Interval with compile-time bounds, `low < high` is the caller's contract.
    pub(crate) const fn from_const(low: f64, high: f64) -> Self {
        RightOpenInterval { low, high }
    }

    /// Reduce `v` modulo the interval size into `[low, high)`.
    ///
    /// ```text
    /// reduce(v) = low + floor_mod(v - low, high - low)
    /// floor_mod(x, y) = x - y * floor(x / y)
    /// ```
    ///
    /// The floor-based modulo keeps the result `>= low` for negative inputs.
    /// When floating rounding pushes the result onto `high` (e.g. a tiny negative
    /// `v - low`), the value is folded back to `low` so that the result always
    /// lies in the interval and reducing twice is a no-op.
    pub fn reduce(&self, v: f64) -> f64 {
        let size = self.size();
        let x = v - self.low;
        let reduced = self.low + (x - size * (x / size).floor());
        if reduced >= self.high || reduced < self.low {
            self.low
        } else {
            reduced
        }
    }
}

impl Interval for RightOpenInterval {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn contains(&self, v: f64) -> bool {
        self.low <= v && v < self.high
    }
}

impl fmt::Display for RightOpenInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}[", self.low, self.high)
    }
}

#[cfg(test)]
mod interval_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_invalid_bounds() {
        assert!(ClosedInterval::of(1.0, 1.0).is_err());
        assert!(ClosedInterval::of(2.0, 1.0).is_err());
        assert!(RightOpenInterval::of(f64::NAN, 1.0).is_err());
        assert!(RightOpenInterval::symmetric(0.0).is_err());
        assert!(ClosedInterval::symmetric(-2.0).is_err());
    }

    #[test]
    fn test_contains() {
        let closed = ClosedInterval::of(-1.0, 1.0).unwrap();
        assert!(closed.contains(-1.0));
        assert!(closed.contains(1.0));
        assert!(!closed.contains(1.0 + 1e-12));

        let open = RightOpenInterval::of(-1.0, 1.0).unwrap();
        assert!(open.contains(-1.0));
        assert!(!open.contains(1.0));
    }

    #[test]
    fn test_symmetric() {
        let closed = ClosedInterval::symmetric(4.0).unwrap();
        assert_eq!(closed.low(), -2.0);
        assert_eq!(closed.high(), 2.0);
        assert_eq!(closed.size(), 4.0);
    }

    #[test]
    fn test_clip() {
        let closed = ClosedInterval::of(-3.0, 5.0).unwrap();
        assert_eq!(closed.clip(-10.0), -3.0);
        assert_eq!(closed.clip(12.0), 5.0);
        assert_eq!(closed.clip(0.25), 0.25);
        assert_eq!(closed.clip(f64::INFINITY), 5.0);
        assert_eq!(closed.clip(f64::NEG_INFINITY), -3.0);
    }

    #[test]
    fn test_clip_nan_lands_on_low() {
        let closed = ClosedInterval::of(-1.0, 1.0).unwrap();
        assert_eq!(closed.clip(f64::NAN), -1.0);
        let open = RightOpenInterval::of(0.5, 2.5).unwrap();
        assert!(open.contains(open.clip(f64::NAN)));
    }

    #[test]
    fn test_clip_stays_in_bounds() {
        let open = RightOpenInterval::of(0.5, 2.5).unwrap();
        for i in -100..100 {
            let v = i as f64 * 0.137;
            let c = open.clip(v);
            assert!((open.low()..=open.high()).contains(&c));
            if open.contains(v) {
                assert_eq!(c, v);
            }
        }
    }

    #[test]
    fn test_reduce() {
        let open = RightOpenInterval::of(-180.0, 180.0).unwrap();
        assert_abs_diff_eq!(open.reduce(190.0), -170.0, epsilon = 1e-12);
        assert_abs_diff_eq!(open.reduce(-190.0), 170.0, epsilon = 1e-12);
        assert_eq!(open.reduce(180.0), -180.0);
        assert_eq!(open.reduce(-180.0), -180.0);
        assert_abs_diff_eq!(open.reduce(725.0), 5.0, epsilon = 1e-12);

        let unit = RightOpenInterval::of(0.0, 1.0).unwrap();
        assert_abs_diff_eq!(unit.reduce(-0.25), 0.75, epsilon = 1e-15);
    }

    #[test]
    fn test_reduce_never_reaches_high() {
        let turn = RightOpenInterval::from_const(0.0, std::f64::consts::TAU);
        let r = turn.reduce(-1e-17);
        assert!(turn.contains(r));
        assert_eq!(turn.reduce(r), r);
    }

    #[test]
    fn test_display() {
        let closed = ClosedInterval::of(-1.5, 2.0).unwrap();
        assert_eq!(closed.to_string(), "[-1.5,2]");
        let open = RightOpenInterval::of(0.0, 1.0).unwrap();
        assert_eq!(open.to_string(), "[0,1[");
    }
}
