//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` with the
//! handful of operations exponent normalisation needs: exact powers,
//! exact roots and a logarithm estimate that survives very large values.

use dashu::base::{BitTest, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
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

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the number of bits needed to represent the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Natural logarithm estimate of a positive integer.
    ///
    /// Values wider than 62 bits are shifted down first, so the estimate
    /// stays finite for arbitrarily large inputs. Returns `None` for
    /// zero and negative values.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ln(&self) -> Option<f64> {
        if self.signum() <= 0 {
            return None;
        }
        if let Some(small) = self.to_i64() {
            return Some((small as f64).ln());
        }
        let shift = self.bit_len() - 62;
        let head: IBig = &self.0 >> shift;
        let head: i64 = head.try_into().ok()?;
        Some((head as f64).ln() + shift as f64 * std::f64::consts::LN_2)
    }

    /// Returns the exact `k`-th root if `self` is a perfect `k`-th power.
    ///
    /// Only non-negative values are considered; the search is driven by
    /// the floating point estimate and confirmed with exact arithmetic.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn exact_root(&self, k: u32) -> Option<Self> {
        if k == 0 || self.is_negative() {
            return None;
        }
        if k == 1 || self.is_zero() || self.is_one() {
            return Some(self.clone());
        }
        let estimate = (self.ln()? / f64::from(k)).exp().round();
        if !estimate.is_finite() || estimate > 9.0e15 {
            return None;
        }
        let estimate = estimate as i64;
        (estimate - 1..=estimate + 1)
            .filter(|candidate| *candidate >= 0)
            .map(Integer::new)
            .find(|candidate| &candidate.pow(k) == self)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
