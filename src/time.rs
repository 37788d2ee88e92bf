//! # Reference epochs and sidereal time
//!
//! Instants are [`hifitime::Epoch`] values. Elapsed time is always measured in
//! **UTC days** (leap-second free, like a civil calendar) at millisecond
//! precision, from one of two fixed [`ReferenceEpoch`]s:
//!
//! - [`ReferenceEpoch::J2000`] — 2000-01-01 12:00 UTC, origin of the Julian
//!   century series (obliquity, sidereal time).
//! - [`ReferenceEpoch::J2010`] — 2009-12-31 00:00 UTC, i.e. "2010.0" one day early,
//!   the almanac convention used by the Sun, Moon and planet models.
//!
//! Sidereal time follows the low-order series of the Astronomical Almanac:
//!
//! ```text
//! S0 = 0.000025862 T² + 2400.051336 T + 6.697374558      [hours]
//! S  = S0 + 1.002737909 t                                [hours]
//! ```
//!
//! with `T` the Julian centuries from J2000 to the UTC midnight of the date and
//! `t` the hours elapsed since that midnight.

use hifitime::Epoch;

use crate::angle::{normalize_positive, of_hr};
use crate::constants::{
    Days, Radian, DAYS_PER_JULIAN_CENTURY, MILLIS_PER_DAY, MILLIS_PER_HOUR, SIDEREAL_RATE,
};
use crate::coordinates::GeographicCoordinates;
use crate::polynomial::Polynomial;

/// Greenwich sidereal time at 0h UTC, in hours, as a polynomial in Julian centuries.
const SIDEREAL_TIME_AT_MIDNIGHT: Polynomial =
    Polynomial::from_static(&[0.000025862, 2400.051336, 6.697374558]);

/// Fixed reference instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceEpoch {
    /// 2000-01-01 12:00 UTC
    J2000,
    /// 2010-01-01 00:00 UTC minus one day
    J2010,
}

impl ReferenceEpoch {
    /// Modified Julian Date (UTC) of the epoch.
    pub fn mjd(&self) -> f64 {
        match self {
            ReferenceEpoch::J2000 => 51544.5,
            ReferenceEpoch::J2010 => 55196.0,
        }
    }

    /// The epoch as a [`hifitime::Epoch`].
    pub fn epoch(&self) -> Epoch {
        Epoch::from_mjd_utc(self.mjd())
    }

    /// Signed number of days from this epoch to `when`.
    ///
    /// The difference is taken on the UTC scale at millisecond precision.
    ///
    /// Arguments
    /// ---------
    /// * `when`: the target instant.
    ///
    /// Returns
    /// --------
    /// * Fractional days, negative when `when` precedes the epoch.
    pub fn days_until(&self, when: &Epoch) -> Days {
        self.days_until_mjd(when.to_mjd_utc_days())
    }

    /// Signed number of Julian centuries (36525 days) from this epoch to `when`.
    pub fn julian_centuries_until(&self, when: &Epoch) -> f64 {
        self.days_until(when) / DAYS_PER_JULIAN_CENTURY
    }

    fn days_until_mjd(&self, mjd_utc: f64) -> Days {
        round_to_millis(mjd_utc - self.mjd())
    }
}

/// Snap a duration in days onto a whole number of milliseconds.
///
/// The MJD round-trip carries sub-microsecond noise, rounding to the nearest
/// millisecond removes it.
fn round_to_millis(days: Days) -> Days {
    (days * MILLIS_PER_DAY).round() / MILLIS_PER_DAY
}

/// Greenwich sidereal time of `when`, in radians in `[0, 2π)`.
///
/// Arguments
/// ---------
/// * `when`: the instant, any time scale (converted to UTC internally).
///
/// Returns
/// --------
/// * Greenwich sidereal time angle in radians, normalized to `[0, 2π)`.
///
/// # See also
/// * [`local_sidereal_time`] – adds the observer's longitude
pub fn greenwich_sidereal_time(when: &Epoch) -> Radian {
    let mjd = when.to_mjd_utc_days();

    // MJD days start at midnight UTC
    let midnight = mjd.floor();
    let centuries = ReferenceEpoch::J2000.days_until_mjd(midnight) / DAYS_PER_JULIAN_CENTURY;
    let hours_since_midnight = round_to_millis(mjd - midnight) * MILLIS_PER_DAY / MILLIS_PER_HOUR;

    let s0 = SIDEREAL_TIME_AT_MIDNIGHT.at(centuries);
    let s1 = SIDEREAL_RATE * hours_since_midnight;

    normalize_positive(of_hr(s0 + s1))
}

/// Local sidereal time of `when` at the observer `location`, in radians in `[0, 2π)`.
///
/// ```text
/// LST = normalize_positive(GST + longitude)
/// ```
pub fn local_sidereal_time(when: &Epoch, location: &GeographicCoordinates) -> Radian {
    normalize_positive(greenwich_sidereal_time(when) + location.lon())
}
