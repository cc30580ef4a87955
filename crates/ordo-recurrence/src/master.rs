//! The Master Theorem for `T(n) = a·T(n/b) + f(n)`.
//!
//! With `c = log_b a`:
//!
//! 1. `f = O(n^(c−ε))` gives `Θ(n^c)`
//! 2. `f = Θ(n^c)` gives `Θ(n^c log n)`
//! 3. `f = Ω(n^(c+ε))` with `a·f(n/b) ≤ δ·f(n)`, `δ < 1`, gives `Θ(f)`
//!
//! Work `n^c log^k n` with `k > 0` sits between the cases and is left to
//! the recursion tree.

use num_traits::Zero;
use ordo_growth::{Comparator, Growth, Monomial, PolyGap, Profile, Variable};
use ordo_numeric::Exponent;
use std::cmp::Ordering;
use std::fmt;

use crate::tree::{LevelTrend, RecursionTree};

/// A Master Theorem case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MasterCase {
    /// Work polynomially below the leaf count.
    One,
    /// Work exactly matching the leaf count.
    Two,
    /// Regular work polynomially above the leaf count.
    Three,
}

impl MasterCase {
    /// The recursion-tree trend the case corresponds to.
    #[must_use]
    pub fn trend(self) -> LevelTrend {
        match self {
            MasterCase::One => LevelTrend::Growing,
            MasterCase::Two => LevelTrend::Balanced,
            MasterCase::Three => LevelTrend::Shrinking,
        }
    }
}

impl fmt::Display for MasterCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = match self {
            MasterCase::One => 1,
            MasterCase::Two => 2,
            MasterCase::Three => 3,
        };
        write!(f, "case {index}")
    }
}

/// Matches one work summand against `n^critical`.
///
/// Returns `None` when no case applies.
#[must_use]
pub fn match_case(
    comparator: &Comparator,
    term: &Monomial,
    var: &Variable,
    critical: &Exponent,
) -> Option<MasterCase> {
    match comparator.polynomial_gap(term, var, critical) {
        PolyGap::Below => Some(MasterCase::One),
        PolyGap::Balanced { log_power } if log_power.is_zero() => Some(MasterCase::Two),
        PolyGap::Above if is_regular(term.profile(var), critical) => Some(MasterCase::Three),
        _ => None,
    }
}

/// The regularity condition `a·f(n/b) ≤ δ·f(n)` for some `δ < 1`.
///
/// For `f = n^d log^k n` the ratio tends to `a / b^d`, which is below one
/// exactly when `d > log_b a`. Exponential and factorial work always
/// satisfies it.
#[must_use]
pub fn is_regular(profile: Option<&Profile>, critical: &Exponent) -> bool {
    match profile {
        None => false,
        Some(profile) if !profile.is_polylog() => true,
        Some(profile) => profile.degree().cmp_exact(critical) == Some(Ordering::Greater),
    }
}

/// The closed form a case gives for one work summand.
#[must_use]
pub fn closed_form(case: MasterCase, tree: &RecursionTree, term: &Monomial) -> Growth {
    tree.sum(term, case.trend())
}
