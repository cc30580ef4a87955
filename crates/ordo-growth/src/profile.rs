//! Per-variable growth profiles.
//!
//! A profile is the canonical product of every elementary kind over a
//! single variable: `(n!)^f · b^n · n^d · log^k n`. Multiplying two
//! profiles adds `f`, `d`, `k` and multiplies `b`.

use num_traits::{One, Zero};
use ordo_numeric::{Exponent, Rational};
use std::cmp::Ordering;

use crate::{GrowthError, GrowthKind, GrowthTerm, Variable};

/// Canonical product of growth kinds over one variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Profile {
    factorial: Rational,
    base: Rational,
    degree: Exponent,
    log_power: Rational,
}

impl Default for Profile {
    fn default() -> Self {
        Self::neutral()
    }
}

impl Profile {
    /// The neutral profile, growing like a constant.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            factorial: Rational::zero(),
            base: Rational::one(),
            degree: Exponent::zero(),
            log_power: Rational::zero(),
        }
    }

    /// `log^power n`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::NegativeLogPower`] for a negative power.
    pub fn logarithmic(power: Rational) -> Result<Self, GrowthError> {
        if power.is_negative() {
            return Err(GrowthError::NegativeLogPower(power));
        }
        Ok(Self {
            log_power: power,
            ..Self::neutral()
        })
    }

    /// `n^degree`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::NegativeDegree`] when the degree is negative
    /// or its sign cannot be decided.
    pub fn polynomial(degree: Exponent) -> Result<Self, GrowthError> {
        match degree.sign() {
            Some(Ordering::Less) | None => Err(GrowthError::NegativeDegree(degree)),
            _ => Ok(Self {
                degree,
                ..Self::neutral()
            }),
        }
    }

    /// `base^n`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::InvalidBase`] unless `base > 1`.
    pub fn exponential(base: Rational) -> Result<Self, GrowthError> {
        if base <= Rational::one() {
            return Err(GrowthError::InvalidBase(base));
        }
        Ok(Self {
            base,
            ..Self::neutral()
        })
    }

    /// `(n!)^power`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::NegativeFactorialPower`] for a negative power.
    pub fn factorial(power: Rational) -> Result<Self, GrowthError> {
        if power.is_negative() {
            return Err(GrowthError::NegativeFactorialPower(power));
        }
        Ok(Self {
            factorial: power,
            ..Self::neutral()
        })
    }

    /// Power of the factorial component.
    #[must_use]
    pub fn factorial_power(&self) -> &Rational {
        &self.factorial
    }

    /// Base of the exponential component, 1 when absent.
    #[must_use]
    pub fn base(&self) -> &Rational {
        &self.base
    }

    /// Degree of the polynomial component.
    #[must_use]
    pub fn degree(&self) -> &Exponent {
        &self.degree
    }

    /// Power of the logarithmic component.
    #[must_use]
    pub fn log_power(&self) -> &Rational {
        &self.log_power
    }

    /// Returns true if the profile grows like a constant.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.factorial.is_zero()
            && self.base.is_one()
            && self.degree.is_zero()
            && self.log_power.is_zero()
    }

    /// Returns true if there is no exponential or factorial component.
    #[must_use]
    pub fn is_polylog(&self) -> bool {
        self.factorial.is_zero() && self.base.is_one()
    }

    /// The fastest-growing family present.
    #[must_use]
    pub fn kind(&self) -> GrowthKind {
        if !self.factorial.is_zero() {
            GrowthKind::Factorial
        } else if !self.base.is_one() {
            GrowthKind::Exponential
        } else if !self.degree.is_zero() {
            GrowthKind::Polynomial
        } else if !self.log_power.is_zero() {
            GrowthKind::Logarithmic
        } else {
            GrowthKind::Constant
        }
    }

    /// Product of two profiles over the same variable.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            factorial: &self.factorial + &other.factorial,
            base: &self.base * &other.base,
            degree: self.degree.clone() + other.degree.clone(),
            log_power: &self.log_power + &other.log_power,
        }
    }

    /// Raises the profile to a non-negative rational power.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::NegativePower`] for a negative power and
    /// [`GrowthError::UnsupportedComposition`] when a fractional power of
    /// the exponential base is not rational.
    pub fn pow(&self, power: &Rational) -> Result<Self, GrowthError> {
        if power.is_negative() {
            return Err(GrowthError::NegativePower(power.clone()));
        }
        if power.is_zero() {
            return Ok(Self::neutral());
        }
        let base = if self.base.is_one() {
            Rational::one()
        } else {
            rational_power(&self.base, power).ok_or_else(|| {
                GrowthError::UnsupportedComposition(format!("({})^{}", self.base, power))
            })?
        };
        Ok(Self {
            factorial: &self.factorial * power,
            base,
            degree: self.degree.scale(power),
            log_power: &self.log_power * power,
        })
    }

    /// Asymptotic comparison of two profiles over the same variable.
    ///
    /// Returns `None` when the polynomial degrees cannot be separated.
    #[must_use]
    pub fn cmp_growth(&self, other: &Self) -> Option<Ordering> {
        match self.factorial.cmp(&other.factorial) {
            Ordering::Equal => {}
            ordering => return Some(ordering),
        }
        match self.base.cmp(&other.base) {
            Ordering::Equal => {}
            ordering => return Some(ordering),
        }
        match self.degree.cmp_exact(&other.degree)? {
            Ordering::Equal => Some(self.log_power.cmp(&other.log_power)),
            ordering => Some(ordering),
        }
    }

    /// Splits the profile into elementary terms, fastest first.
    #[must_use]
    pub fn terms(&self, var: &Variable) -> Vec<GrowthTerm> {
        let mut terms = Vec::new();
        if !self.factorial.is_zero() {
            terms.push(GrowthTerm::Factorial {
                var: var.clone(),
                power: self.factorial.clone(),
            });
        }
        if !self.base.is_one() {
            terms.push(GrowthTerm::Exponential {
                var: var.clone(),
                base: self.base.clone(),
            });
        }
        if !self.degree.is_zero() {
            terms.push(GrowthTerm::Polynomial {
                var: var.clone(),
                degree: self.degree.clone(),
            });
        }
        if !self.log_power.is_zero() {
            terms.push(GrowthTerm::Logarithmic {
                var: var.clone(),
                power: self.log_power.clone(),
            });
        }
        terms
    }
}

/// `value^(p/q)` when it is rational.
fn rational_power(value: &Rational, power: &Rational) -> Option<Rational> {
    let p = power.numerator().to_i64()?;
    let q = u32::try_from(power.denominator().to_i64()?).ok()?;
    value.exact_root(q)?.powi(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    #[test]
    fn test_multiply() {
        let linear = Profile::polynomial(Exponent::one()).unwrap();
        let log = Profile::logarithmic(q(1, 1)).unwrap();
        let product = linear.multiply(&log);
        assert_eq!(product.degree(), &Exponent::one());
        assert_eq!(product.log_power(), &q(1, 1));
        assert_eq!(product.kind(), GrowthKind::Polynomial);
    }

    #[test]
    fn test_lexicographic_order() {
        let n_cubed = Profile::polynomial(Exponent::integer(3)).unwrap();
        let two_pow = Profile::exponential(q(2, 1)).unwrap();
        let fact = Profile::factorial(q(1, 1)).unwrap();
        let n_log_n = Profile::polynomial(Exponent::one())
            .unwrap()
            .multiply(&Profile::logarithmic(q(1, 1)).unwrap());

        assert_eq!(n_cubed.cmp_growth(&two_pow), Some(Ordering::Less));
        assert_eq!(two_pow.cmp_growth(&fact), Some(Ordering::Less));
        assert_eq!(n_log_n.cmp_growth(&n_cubed), Some(Ordering::Less));
        assert_eq!(
            Profile::neutral().cmp_growth(&Profile::logarithmic(q(1, 1)).unwrap()),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_invalid_components() {
        assert!(Profile::exponential(q(1, 1)).is_err());
        assert!(Profile::polynomial(Exponent::integer(-1)).is_err());
        assert!(Profile::logarithmic(q(-1, 2)).is_err());
    }

    #[test]
    fn test_pow() {
        let four_pow = Profile::exponential(q(4, 1)).unwrap();
        let root = four_pow.pow(&q(1, 2)).unwrap();
        assert_eq!(root.base(), &q(2, 1));

        let three_pow = Profile::exponential(q(3, 1)).unwrap();
        assert!(three_pow.pow(&q(1, 2)).is_err());
        assert!(Profile::neutral().pow(&q(-1, 1)).is_err());
    }
}
