//! # Angle conversions and normalization
//!
//! Angles are plain `f64` radians throughout the crate. This module gathers the
//! unit conversions (degrees, hours, arcseconds, degrees-minutes-seconds) and the
//! reduction of an arbitrary angle into `[0, 2π)`.

use crate::constants::{ArcSec, Degree, Hour, Radian, DPI, RADEG, RADH, RADSEC};
use crate::interval::{ClosedInterval, RightOpenInterval};
use crate::rigel_errors::RigelError;

/// One full turn, 2π
pub const TAU: Radian = DPI;

const FULL_TURN: RightOpenInterval = RightOpenInterval::from_const(0.0, DPI);

/// `[-1, 1]`, domain of `asin`/`acos`. Rounding can push a computed sine just
/// outside of it.
pub(crate) const UNIT_RANGE: ClosedInterval = ClosedInterval::from_const(-1.0, 1.0);

/// Reduce an angle into `[0, 2π)`.
///
/// Uses [`RightOpenInterval::reduce`], which folds a result landing on 2π after
/// rounding back to 0. Applying the function twice gives the same value.
///
/// Arguments
/// ---------
/// * `rad`: any finite angle in radians.
///
/// Returns
/// --------
/// * The equivalent angle in `[0, 2π)`.
pub fn normalize_positive(rad: Radian) -> Radian {
    FULL_TURN.reduce(rad)
}

/// Build an angle from arcseconds.
pub fn of_arcsec(sec: ArcSec) -> Radian {
    sec * RADSEC
}

/// Convert an angle to arcseconds.
pub fn to_arcsec(rad: Radian) -> ArcSec {
    rad / RADSEC
}

/// Build an angle from degrees, minutes and seconds of arc.
///
/// Arguments
/// ---------
/// * `deg`: whole degrees
/// * `min`: minutes, `0 <= min < 60`
/// * `sec`: seconds, `0 <= sec < 60`
///
/// Errors
/// ------
/// * [`RigelError::InvalidDms`] when the minutes or seconds are out of range.
pub fn of_dms(deg: i32, min: i32, sec: f64) -> Result<Radian, RigelError> {
    if !(0..60).contains(&min) || !(0.0..60.0).contains(&sec) {
        return Err(RigelError::InvalidDms { deg, min, sec });
    }
    let degrees = deg as f64 + min as f64 / 60.0 + sec / 3600.0;
    Ok(of_deg(degrees))
}

/// Build an angle from degrees.
pub fn of_deg(deg: Degree) -> Radian {
    deg * RADEG
}

/// Convert an angle to degrees.
pub fn to_deg(rad: Radian) -> Degree {
    rad / RADEG
}

/// Build an angle from hours (1h = 15°).
pub fn of_hr(hr: Hour) -> Radian {
    hr * RADH
}

/// Convert an angle to hours.
pub fn to_hr(rad: Radian) -> Hour {
    rad / RADH
}
