//! # Low-order polynomials
//!
//! Time series such as the obliquity of the ecliptic or the Greenwich sidereal
//! time at 0h are cubic or quadratic polynomials in Julian centuries. They are
//! stored highest degree first and evaluated with Horner's scheme.

use std::borrow::Cow;
use std::fmt;

use crate::rigel_errors::RigelError;

/// Polynomial with real coefficients, highest degree first.
///
/// ```text
/// Polynomial::new(vec![a_n, ..., a_1, a_0])  =>  a_n x^n + ... + a_1 x + a_0
/// ```
#[derive(Debug, Clone)]
pub struct Polynomial {
    coefficients: Cow<'static, [f64]>,
}

impl Polynomial {
    /// Build a polynomial from its coefficients, highest degree first.
    ///
    /// A single non-zero coefficient gives a constant polynomial.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::EmptyPolynomial`] if `coefficients` is empty.
    /// * [`RigelError::ZeroLeadingCoefficient`] if the leading coefficient is zero,
    ///   the constant `0` included.
    pub fn new(coefficients: Vec<f64>) -> Result<Self, RigelError> {
        match coefficients.first() {
            None => Err(RigelError::EmptyPolynomial),
            Some(&lead) if lead == 0.0 => {
                Err(RigelError::ZeroLeadingCoefficient(coefficients.len() - 1))
            }
            Some(_) => Ok(Polynomial {
                coefficients: Cow::Owned(coefficients),
            }),
        }
    }

    /// Wrap a compile-time coefficient table.
    ///
    /// Used for the crate's fixed astronomical series, whose leading coefficient
    /// is a non-zero literal.
    pub(crate) const fn from_static(coefficients: &'static [f64]) -> Self {
        Polynomial {
            coefficients: Cow::Borrowed(coefficients),
        }
    }

    /// Build a polynomial from a slice of coefficients, highest degree first.
    pub fn of(coefficients: &[f64]) -> Result<Self, RigelError> {
        Self::new(coefficients.to_vec())
    }

    /// Degree of the polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate the polynomial at `x` using Horner's method.
    ///
    /// ```text
    /// p(x) = ((a_n x + a_{n-1}) x + ...) x + a_0
    /// ```
    pub fn at(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut first = true;
        for (i, &c) in self.coefficients.iter().enumerate() {
            let power = degree - i;
            if c == 0.0 {
                continue;
            }

            if first {
                if c < 0.0 {
                    write!(f, "-")?;
                }
            } else if c < 0.0 {
                write!(f, "-")?;
            } else {
                write!(f, "+")?;
            }
            first = false;

            let magnitude = c.abs();
            if magnitude != 1.0 || power == 0 {
                write!(f, "{magnitude}")?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{power}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod polynomial_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rejects_zero_leading_coefficient() {
        assert_eq!(
            Polynomial::of(&[0.0, 1.0, 2.0]).unwrap_err(),
            RigelError::ZeroLeadingCoefficient(2)
        );
        assert_eq!(
            Polynomial::new(vec![]).unwrap_err(),
            RigelError::EmptyPolynomial
        );
        assert_eq!(
            Polynomial::of(&[0.0]).unwrap_err(),
            RigelError::ZeroLeadingCoefficient(0)
        );
        assert!(Polynomial::of(&[-0.0]).is_err());
        assert!(Polynomial::of(&[1e-300]).is_ok());
    }

    #[test]
    fn test_horner_evaluation() {
        let p = Polynomial::of(&[1.0, -3.0, 2.0]).unwrap();
        assert_eq!(p.degree(), 2);
        assert_eq!(p.at(1.0), 0.0);
        assert_eq!(p.at(2.0), 0.0);
        assert_eq!(p.at(3.0), 2.0);

        let c = Polynomial::of(&[4.5]).unwrap();
        assert_eq!(c.degree(), 0);
        assert_eq!(c.at(1e6), 4.5);
    }

    #[test]
    fn test_sidereal_series() {
        // GST at 0h in hours, evaluated at T = 0 and T = 1
        let p = Polynomial::of(&[0.000025862, 2400.051336, 6.697374558]).unwrap();
        assert_abs_diff_eq!(p.at(0.0), 6.697374558, epsilon = 1e-15);
        assert_abs_diff_eq!(p.at(1.0), 2406.748736420, epsilon = 1e-9);
    }

    #[test]
    fn test_display() {
        let p = Polynomial::of(&[-1.0, 0.0, 3.5, -1.0, 0.0]).unwrap();
        assert_eq!(p.to_string(), "-x^4+3.5x^2-x");
        let q = Polynomial::of(&[2.0, 1.0, -7.0]).unwrap();
        assert_eq!(q.to_string(), "2x^2+x-7");
        let c = Polynomial::of(&[-4.0]).unwrap();
        assert_eq!(c.to_string(), "-4");
    }
}
