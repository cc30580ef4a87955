//! Arbitrary precision rational numbers.
//!
//! Degrees, logarithm powers, exponential bases and recurrence factors
//! are all rationals; keeping them exact is what lets `3n²` and `n²`
//! land in the same class and `log_4 2` fold back to `1/2`.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Integer;

/// Largest root degree tried by [`Rational::perfect_power`].
const MAX_ROOT_DEGREE: u32 = 64;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let negative = denominator.is_negative();
        let value = Self(RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        ));
        if negative {
            -value
        } else {
            value
        }
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates an integral rational.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::from_integer(Integer::new(value))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Converts to an i64 if the value is integral and fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.numerator().to_i64()
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Computes self^exp for a signed exponent.
    ///
    /// Returns `None` for a negative power of zero or when the exponent
    /// does not fit in a `u32`.
    #[must_use]
    pub fn powi(&self, exp: i64) -> Option<Self> {
        let magnitude = u32::try_from(exp.unsigned_abs()).ok()?;
        if exp < 0 {
            if self.is_zero() {
                return None;
            }
            Some(self.recip().pow(magnitude))
        } else {
            Some(self.pow(magnitude))
        }
    }

    /// Returns the exact `k`-th root when both numerator and denominator
    /// are perfect `k`-th powers.
    #[must_use]
    pub fn exact_root(&self, k: u32) -> Option<Self> {
        if self.is_negative() {
            return None;
        }
        let num = self.numerator().exact_root(k)?;
        let den = self.denominator().exact_root(k)?;
        Some(Self::new(num, den))
    }

    /// Splits a positive rational into `root^k` with the largest `k`.
    ///
    /// The returned root is not itself a perfect power, so `4`, `8` and
    /// `16` all share the root `2`. Non-positive values and one are
    /// returned unchanged with `k = 1`.
    #[must_use]
    pub fn perfect_power(&self) -> (Self, u32) {
        let mut root = self.clone();
        let mut power = 1u32;
        if !self.is_positive() || self.is_one() {
            return (root, power);
        }
        'search: loop {
            let bits = root.numerator().bit_len().max(root.denominator().bit_len());
            let limit = u32::try_from(bits).unwrap_or(MAX_ROOT_DEGREE).min(MAX_ROOT_DEGREE);
            for k in 2..=limit {
                if let Some(smaller) = root.exact_root(k) {
                    root = smaller;
                    power *= k;
                    continue 'search;
                }
            }
            return (root, power);
        }
    }

    /// Natural logarithm estimate of a positive rational.
    #[must_use]
    pub fn ln(&self) -> Option<f64> {
        if !self.is_positive() {
            return None;
        }
        Some(self.numerator().ln()? - self.denominator().ln()?)
    }

    /// Floating point estimate of the value.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self.signum() {
            0 => 0.0,
            1 => self.ln().map_or(f64::NAN, f64::exp),
            _ => -self.abs().ln().map_or(f64::NAN, f64::exp),
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        Rational(&self.0 / &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::integer(i64::from(n))
    }
}

impl From<u32> for Rational {
    fn from(n: u32) -> Self {
        Self::integer(i64::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction() {
        let r = Rational::from_i64(4, 6);
        assert_eq!(r.numerator().to_i64(), Some(2));
        assert_eq!(r.denominator().to_i64(), Some(3));

        let negative_den = Rational::from_i64(1, -2);
        assert!(negative_den.is_negative());
        assert_eq!(negative_den, Rational::from_i64(-1, 2));
    }

    #[test]
    fn test_sign_of_zero() {
        let zero = Rational::zero();
        assert_eq!(zero.signum(), 0);
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
        assert!(Rational::from_i64(1, 3).is_positive());
        assert!(Rational::from_i64(-1, 3).is_negative());
        assert_eq!(zero.ln(), None);
    }

    #[test]
    fn test_powi() {
        let half = Rational::from_i64(1, 2);
        assert_eq!(half.powi(-3), Some(Rational::integer(8)));
        assert_eq!(half.powi(2), Some(Rational::from_i64(1, 4)));
        assert_eq!(Rational::integer(0).powi(-1), None);
    }

    #[test]
    fn test_exact_root() {
        assert_eq!(
            Rational::from_i64(8, 27).exact_root(3),
            Some(Rational::from_i64(2, 3))
        );
        assert_eq!(Rational::integer(3).exact_root(2), None);
    }

    #[test]
    fn test_perfect_power() {
        assert_eq!(Rational::integer(64).perfect_power(), (Rational::integer(2), 6));
        assert_eq!(Rational::integer(9).perfect_power(), (Rational::integer(3), 2));
        assert_eq!(Rational::integer(12).perfect_power(), (Rational::integer(12), 1));
        assert_eq!(
            Rational::from_i64(9, 4).perfect_power(),
            (Rational::from_i64(3, 2), 2)
        );
        assert_eq!(Rational::one().perfect_power(), (Rational::one(), 1));
    }

    #[test]
    fn test_to_f64() {
        assert!((Rational::from_i64(3, 2).to_f64() - 1.5).abs() < 1e-12);
        assert!((Rational::from_i64(-1, 4).to_f64() + 0.25).abs() < 1e-12);
        assert_eq!(Rational::integer(0).to_f64(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::from_i64(3, 1).to_string(), "3");
        assert_eq!(Rational::from_i64(2, 3).to_string(), "2/3");
    }
}
