//! Exact real exponents.
//!
//! An [`Exponent`] is `r + Σ cᵢ·log_{bᵢ}(aᵢ)` with rational `r`, `cᵢ`,
//! `aᵢ > 0` and `bᵢ > 1`. This is the smallest family that contains
//! every rational degree and is closed under the `n^(log_b a)` terms
//! produced by divide-and-conquer recurrences, sums of such terms and
//! rational scaling.
//!
//! Normal form:
//! - bases and arguments are reduced to primitive roots greater than one,
//!   so `log_4 9 = log_2 3` and `log_2 (1/3) = -log_2 3`
//! - logarithms sharing a base combine into one (`log_2 3 + log_2 5 = log_2 15`)
//! - a logarithm whose argument equals its base folds into `r`
//!
//! Comparisons are exact while at most one logarithm survives, because
//! `log_b a ⋚ p/q` is equivalent to `a^q ⋚ b^p`.

use num_traits::{One, Zero};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::Rational;

/// Largest power used when combining logarithms that share a base.
const MAX_COMBINED_POWER: i64 = 64;

/// Largest power used for the exact `a^q ⋚ b^p` comparison.
const MAX_EXACT_POWER: i64 = 4096;

/// Floating point band inside which a mixed-base comparison is undecided.
const UNDECIDED_BAND: f64 = 1e-9;

/// A scaled logarithm `coefficient · log_base(argument)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogRatio {
    base: Rational,
    argument: Rational,
    coefficient: Rational,
}

impl LogRatio {
    /// Creates `log_base(argument)`.
    ///
    /// Returns `None` unless `argument > 0` and `base > 1`.
    #[must_use]
    pub fn new(argument: Rational, base: Rational) -> Option<Self> {
        if !argument.is_positive() || base <= Rational::one() {
            return None;
        }
        Some(Self {
            base,
            argument,
            coefficient: Rational::one(),
        })
    }

    /// The logarithm base.
    #[must_use]
    pub fn base(&self) -> &Rational {
        &self.base
    }

    /// The logarithm argument.
    #[must_use]
    pub fn argument(&self) -> &Rational {
        &self.argument
    }

    /// The scale applied to the logarithm.
    #[must_use]
    pub fn coefficient(&self) -> &Rational {
        &self.coefficient
    }

    /// Floating point estimate.
    #[must_use]
    pub fn approx(&self) -> f64 {
        match (self.argument.ln(), self.base.ln()) {
            (Some(a), Some(b)) => self.coefficient.to_f64() * a / b,
            _ => f64::NAN,
        }
    }

    /// Rewrites `c·log_b a` with primitive `a, b > 1`.
    ///
    /// Returns `None` when the logarithm vanishes.
    fn primitive(self) -> Option<Self> {
        if self.coefficient.is_zero() || self.argument.is_one() {
            return None;
        }
        let (base, k) = self.base.perfect_power();
        let inverted = self.argument < Rational::one();
        let argument = if inverted {
            self.argument.recip()
        } else {
            self.argument
        };
        let (argument, j) = argument.perfect_power();
        let coefficient = self.coefficient * Rational::from(j) / Rational::from(k);
        Some(Self {
            base,
            argument,
            coefficient: if inverted { -coefficient } else { coefficient },
        })
    }

    /// Returns the value if it is rational. Only valid in primitive form,
    /// where `a^q = b^p` forces `a = b`.
    fn as_rational(&self) -> Option<&Rational> {
        (self.argument == self.base).then_some(&self.coefficient)
    }

    /// Combines primitive logarithms sharing one base.
    ///
    /// Equal arguments add their coefficients; distinct arguments become
    /// `(1/d)·log_b(Π aᵢ^(d·cᵢ))` while the powers stay small.
    fn combine(members: Vec<Self>) -> SmallVec<[Self; 1]> {
        let mut by_argument: SmallVec<[Self; 1]> = SmallVec::new();
        for log in members {
            match by_argument.iter_mut().find(|existing| existing.argument == log.argument) {
                Some(existing) => {
                    existing.coefficient = &existing.coefficient + &log.coefficient;
                }
                None => by_argument.push(log),
            }
        }
        by_argument.retain(|log| !log.coefficient.is_zero());
        if by_argument.len() < 2 {
            return by_argument;
        }
        match Self::product(&by_argument) {
            Some(product) => product.primitive().into_iter().collect(),
            None => by_argument,
        }
    }

    fn product(logs: &[Self]) -> Option<Self> {
        let base = logs.first()?.base.clone();
        let denominator = logs.iter().try_fold(1i64, |acc, log| {
            Some(lcm(acc, log.coefficient.denominator().to_i64()?))
        })?;
        if denominator > MAX_COMBINED_POWER {
            return None;
        }
        let common = Rational::integer(denominator);
        let mut argument = Rational::one();
        for log in logs {
            let power = (&log.coefficient * &common).to_i64()?;
            if power.abs() > MAX_COMBINED_POWER {
                return None;
            }
            argument = argument * log.argument.powi(power)?;
        }
        Some(Self {
            base,
            argument,
            coefficient: common.recip(),
        })
    }
}

fn lcm(a: i64, b: i64) -> i64 {
    let (mut x, mut y) = (a, b);
    while y != 0 {
        (x, y) = (y, x % y);
    }
    a / x * b
}

/// An exact real exponent closed under `log_b a`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Exponent {
    rational: Rational,
    logs: SmallVec<[LogRatio; 1]>,
}

impl Exponent {
    /// The zero exponent.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// The unit exponent.
    #[must_use]
    pub fn one() -> Self {
        Self::from_rational(Rational::one())
    }

    /// An integral exponent.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::from_rational(Rational::integer(value))
    }

    /// A rational exponent.
    #[must_use]
    pub fn from_rational(rational: Rational) -> Self {
        Self {
            rational,
            logs: SmallVec::new(),
        }
    }

    /// The exponent `log_base(argument)`, folded to a rational when exact.
    ///
    /// Returns `None` unless `argument > 0` and `base > 1`.
    #[must_use]
    pub fn log(argument: Rational, base: Rational) -> Option<Self> {
        let ratio = LogRatio::new(argument, base)?;
        let mut logs = SmallVec::new();
        logs.push(ratio);
        Some(Self::normalized(Rational::zero(), logs))
    }

    /// The rational part `r`.
    #[must_use]
    pub fn rational_part(&self) -> &Rational {
        &self.rational
    }

    /// The surviving logarithms.
    #[must_use]
    pub fn logs(&self) -> &[LogRatio] {
        &self.logs
    }

    /// Returns the value if it is rational.
    #[must_use]
    pub fn as_rational(&self) -> Option<&Rational> {
        self.logs.is_empty().then_some(&self.rational)
    }

    /// Returns true for the zero exponent.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.logs.is_empty() && self.rational.is_zero()
    }

    /// Floating point estimate.
    #[must_use]
    pub fn approx(&self) -> f64 {
        self.rational.to_f64() + self.logs.iter().map(LogRatio::approx).sum::<f64>()
    }

    /// Multiplies the exponent by a rational.
    #[must_use]
    pub fn scale(&self, factor: &Rational) -> Self {
        if factor.is_zero() {
            return Self::zero();
        }
        let logs = self
            .logs
            .iter()
            .map(|log| LogRatio {
                coefficient: &log.coefficient * factor,
                ..log.clone()
            })
            .collect();
        Self::normalized(&self.rational * factor, logs)
    }

    /// Sign of the exponent, `None` when it cannot be decided.
    #[must_use]
    pub fn sign(&self) -> Option<Ordering> {
        match self.logs.as_slice() {
            [] => Some(self.rational.signum().cmp(&0)),
            [single] => sign_single(&self.rational, single).or_else(|| self.sign_approx()),
            _ => self.sign_approx(),
        }
    }

    /// Exact comparison, `None` when the two cannot be separated.
    #[must_use]
    pub fn cmp_exact(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        (self.clone() - other.clone()).sign()
    }

    fn sign_approx(&self) -> Option<Ordering> {
        let value = self.approx();
        if !value.is_finite() || value.abs() < UNDECIDED_BAND {
            return None;
        }
        value.partial_cmp(&0.0)
    }

    fn normalized(mut rational: Rational, logs: SmallVec<[LogRatio; 1]>) -> Self {
        let mut groups: SmallVec<[(Rational, Vec<LogRatio>); 1]> = SmallVec::new();
        for log in logs.into_iter().filter_map(LogRatio::primitive) {
            match groups.iter_mut().find(|(base, _)| *base == log.base) {
                Some((_, members)) => members.push(log),
                None => groups.push((log.base.clone(), vec![log])),
            }
        }

        let mut kept: SmallVec<[LogRatio; 1]> = SmallVec::new();
        for (_, members) in groups {
            for log in LogRatio::combine(members) {
                match log.as_rational() {
                    Some(value) => rational = rational + value,
                    None => kept.push(log),
                }
            }
        }
        kept.sort();
        Self {
            rational,
            logs: kept,
        }
    }
}

/// Exact sign of `r + c·log_b a`.
fn sign_single(rational: &Rational, log: &LogRatio) -> Option<Ordering> {
    // c·log_b a + r ⋚ 0  ⇔  log_b a ⋚ -r/c, flipped when c < 0.
    let threshold = -(rational / &log.coefficient);
    let p = threshold.numerator().to_i64()?;
    let q = threshold.denominator().to_i64()?;
    if p.abs() > MAX_EXACT_POWER || q > MAX_EXACT_POWER {
        return None;
    }
    let lhs = log.argument.powi(q)?;
    let rhs = log.base.powi(p)?;
    let ordering = lhs.cmp(&rhs);
    Some(if log.coefficient.is_negative() {
        ordering.reverse()
    } else {
        ordering
    })
}

impl Add for Exponent {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut logs = self.logs;
        logs.extend(rhs.logs);
        Self::normalized(self.rational + rhs.rational, logs)
    }
}

impl Neg for Exponent {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.scale(&-Rational::one())
    }
}

impl Sub for Exponent {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl From<Rational> for Exponent {
    fn from(rational: Rational) -> Self {
        Self::from_rational(rational)
    }
}

impl From<i64> for Exponent {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.logs.is_empty() {
            return write!(f, "{}", self.rational);
        }
        let mut first = true;
        if !self.rational.is_zero() {
            write!(f, "{}", self.rational)?;
            first = false;
        }
        for log in &self.logs {
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            if !log.coefficient.is_one() {
                write!(f, "{}·", log.coefficient)?;
            }
            write!(f, "log_{}({})", log.base, log.argument)?;
        }
        Ok(())
    }
}
