//! Recursion-tree summation.
//!
//! The work at depth `j` of the tree is `aʲ · f(shrinkʲ(n))`. For the
//! supported growth families that sequence is geometric in `j` (or flat),
//! so the sum over all levels is one of three closed forms:
//!
//! | trend     | total                    |
//! |-----------|--------------------------|
//! | shrinking | the root level, `f(n)`   |
//! | balanced  | `f(n)` times the depth   |
//! | growing   | the leaf level           |

use num_traits::One;
use ordo_growth::{Growth, Monomial, Profile, Variable};
use ordo_numeric::{Exponent, Rational};
use std::cmp::Ordering;
use std::fmt;

use crate::RecurrenceError;

/// How the per-level work evolves from the root to the leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LevelTrend {
    /// Levels shrink geometrically; the root dominates.
    Shrinking,
    /// Every level does the same work up to lower-order factors.
    Balanced,
    /// Levels grow geometrically; the leaves dominate.
    Growing,
}

impl fmt::Display for LevelTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LevelTrend::Shrinking => "shrinking levels",
            LevelTrend::Balanced => "balanced levels",
            LevelTrend::Growing => "growing levels",
        })
    }
}

#[derive(Clone, Debug)]
enum Shape {
    /// `a·T(n/b)`: `log_b n` levels, `n^(log_b a)` leaves.
    Divide { critical: Exponent },
    /// `T(n − c)`: a chain of `n/c` calls.
    Chain,
    /// `a·T(n − c)` with `a > 1`: `(a^(1/c))ⁿ` leaves.
    Fan { base: Rational },
}

/// The recursion tree of a uniform recurrence.
#[derive(Clone, Debug)]
pub struct RecursionTree {
    var: Variable,
    shape: Shape,
    leaves: Growth,
    depth: Growth,
}

impl RecursionTree {
    /// The tree of `a·T(n/b)`.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::MalformedInput`] unless `a ≥ 1` and `b > 1`.
    pub fn divide(var: Variable, a: &Rational, b: &Rational) -> Result<Self, RecurrenceError> {
        if *a < Rational::one() || *b <= Rational::one() {
            return Err(RecurrenceError::MalformedInput(format!(
                "divide recurrence needs a ≥ 1 and b > 1, got a = {a}, b = {b}"
            )));
        }
        let critical = Exponent::log(a.clone(), b.clone()).ok_or_else(|| {
            RecurrenceError::MalformedInput(format!("log_{b}({a}) is undefined"))
        })?;
        Ok(Self {
            leaves: Growth::poly_exponent(var.clone(), critical.clone())?,
            depth: Growth::log(var.clone()),
            shape: Shape::Divide { critical },
            var,
        })
    }

    /// The tree of `a·T(n − c)`.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::MalformedInput`] unless `a ≥ 1` and
    /// `c > 0`, and [`RecurrenceError::UnsolvableRecurrence`] when the leaf
    /// count `a^(n/c)` has no rational base.
    pub fn subtract(var: Variable, a: &Rational, c: &Rational) -> Result<Self, RecurrenceError> {
        if *a < Rational::one() || !c.is_positive() {
            return Err(RecurrenceError::MalformedInput(format!(
                "subtract recurrence needs a ≥ 1 and c > 0, got a = {a}, c = {c}"
            )));
        }
        let (shape, leaves) = if a.is_one() {
            (Shape::Chain, Growth::constant())
        } else {
            let base = leaf_base(a, c)?;
            let leaves = Growth::exponential(var.clone(), base.clone())?;
            (Shape::Fan { base }, leaves)
        };
        Ok(Self {
            depth: Growth::linear(var.clone()),
            shape,
            leaves,
            var,
        })
    }

    /// The recursion variable.
    #[must_use]
    pub fn variable(&self) -> &Variable {
        &self.var
    }

    /// The number of leaves.
    #[must_use]
    pub fn leaves(&self) -> &Growth {
        &self.leaves
    }

    /// The number of levels.
    #[must_use]
    pub fn depth(&self) -> &Growth {
        &self.depth
    }

    /// `log_b a` for divide-and-conquer trees.
    #[must_use]
    pub fn critical_exponent(&self) -> Option<&Exponent> {
        match &self.shape {
            Shape::Divide { critical } => Some(critical),
            _ => None,
        }
    }

    /// The level trend of one work summand.
    ///
    /// Factors in other variables do not change from level to level and
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::UnsolvableRecurrence`] when the work
    /// degree cannot be ordered against `log_b a` exactly.
    pub fn trend(&self, term: &Monomial) -> Result<LevelTrend, RecurrenceError> {
        let neutral = Profile::neutral();
        let profile = term.profile(&self.var).unwrap_or(&neutral);
        // (n − jc)! loses a factor of n per level, faster than any a can add.
        if profile.factorial_power().is_positive() {
            return Ok(LevelTrend::Shrinking);
        }
        if !profile.is_polylog() {
            return Ok(self.exponential_trend(profile));
        }
        match &self.shape {
            Shape::Divide { critical } => match profile.degree().cmp_exact(critical) {
                Some(Ordering::Less) => Ok(LevelTrend::Growing),
                Some(Ordering::Equal) => Ok(LevelTrend::Balanced),
                Some(Ordering::Greater) => Ok(LevelTrend::Shrinking),
                None => Err(RecurrenceError::UnsolvableRecurrence(format!(
                    "cannot order {}^{} against {}^{critical}",
                    self.var,
                    profile.degree(),
                    self.var
                ))),
            },
            Shape::Chain => Ok(LevelTrend::Balanced),
            Shape::Fan { .. } => Ok(LevelTrend::Growing),
        }
    }

    /// Sums one work summand over every level.
    #[must_use]
    pub fn sum(&self, term: &Monomial, trend: LevelTrend) -> Growth {
        let whole = Growth::from_monomial(term.clone());
        match trend {
            LevelTrend::Shrinking => whole,
            LevelTrend::Balanced => whole.multiply(&self.depth),
            LevelTrend::Growing => self
                .leaves
                .multiply(&Growth::from_monomial(term.without(&self.var))),
        }
    }

    /// Trend of exponential work `βⁿ·poly(n)` without a factorial part.
    fn exponential_trend(&self, profile: &Profile) -> LevelTrend {
        match &self.shape {
            // f(n/b) = β^(n/b) is a vanishing fraction of βⁿ.
            Shape::Divide { .. } | Shape::Chain => LevelTrend::Shrinking,
            // Level j carries βⁿ·(a/β^c)ʲ.
            Shape::Fan { base } => match profile.base().cmp(base) {
                Ordering::Greater => LevelTrend::Shrinking,
                Ordering::Equal => LevelTrend::Balanced,
                Ordering::Less => LevelTrend::Growing,
            },
        }
    }
}

/// `a^(1/c)`, the growth base of `a^(n/c)`.
fn leaf_base(a: &Rational, c: &Rational) -> Result<Rational, RecurrenceError> {
    let unsolvable = || {
        RecurrenceError::UnsolvableRecurrence(format!("{a}^(1/{c}) is not rational"))
    };
    let p = c
        .numerator()
        .to_i64()
        .and_then(|p| u32::try_from(p).ok())
        .ok_or_else(unsolvable)?;
    let q = c
        .denominator()
        .to_i64()
        .and_then(|q| u32::try_from(q).ok())
        .ok_or_else(unsolvable)?;
    a.pow(q).exact_root(p).ok_or_else(unsolvable)
}
