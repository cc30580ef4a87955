//! Asymptotic dominance between growth expressions.
//!
//! Two expressions are compared as `n → ∞` for every size variable.
//! Independent variables do not order each other, so the result is a
//! partial order: `n` and `k log k` are [`Dominance::Incomparable`] unless
//! a [`Relations`] set ties `k` to `n`.

use std::cmp::Ordering;

use ordo_numeric::{Exponent, Rational};

use crate::{Growth, GrowthError, Monomial, Variable};

/// Asymptotic comparison result between `f` and `g`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dominance {
    /// `f = O(g)` and `g ≠ O(f)`: f grows slower.
    StrictlySlower,
    /// `f = Θ(g)`.
    Equal,
    /// `g = O(f)` and `f ≠ O(g)`: f grows faster.
    StrictlyFaster,
    /// Neither is `O` of the other (e.g. independent variables).
    Incomparable,
}

impl Dominance {
    /// Returns true for [`Dominance::StrictlySlower`].
    #[must_use]
    pub fn is_slower(self) -> bool {
        matches!(self, Dominance::StrictlySlower)
    }

    /// Returns true for [`Dominance::StrictlyFaster`].
    #[must_use]
    pub fn is_faster(self) -> bool {
        matches!(self, Dominance::StrictlyFaster)
    }

    /// Returns true for [`Dominance::Equal`].
    #[must_use]
    pub fn is_equal(self) -> bool {
        matches!(self, Dominance::Equal)
    }

    /// Swaps the two operands.
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Dominance::StrictlySlower => Dominance::StrictlyFaster,
            Dominance::StrictlyFaster => Dominance::StrictlySlower,
            other => other,
        }
    }

    fn from_bounds(at_most: bool, at_least: bool) -> Self {
        match (at_most, at_least) {
            (true, true) => Dominance::Equal,
            (true, false) => Dominance::StrictlySlower,
            (false, true) => Dominance::StrictlyFaster,
            (false, false) => Dominance::Incomparable,
        }
    }
}

impl From<Dominance> for Option<Ordering> {
    fn from(dominance: Dominance) -> Self {
        match dominance {
            Dominance::StrictlySlower => Some(Ordering::Less),
            Dominance::Equal => Some(Ordering::Equal),
            Dominance::StrictlyFaster => Some(Ordering::Greater),
            Dominance::Incomparable => None,
        }
    }
}

/// Position of a growth term relative to `n^c` in one variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolyGap {
    /// Below `n^(c-ε)` for some `ε > 0`.
    Below,
    /// Exactly `n^c · log^k n`.
    Balanced {
        /// The logarithmic factor `k`.
        log_power: Rational,
    },
    /// Above `n^(c+ε)` for some `ε > 0` (includes exponential and factorial).
    Above,
    /// The degrees cannot be separated exactly.
    Undecided,
}

/// Declared relations between size variables.
///
/// Variables are independent unless related here. An equality makes one
/// variable an alias of another; a bound `k ≤ n` lets `n`-terms absorb
/// `k`-terms of the same shape.
#[derive(Clone, Debug, Default)]
pub struct Relations {
    aliases: Vec<(Variable, Variable)>,
    bounds: Vec<(Variable, Variable)>,
}

impl Relations {
    /// An empty relation set: every variable is independent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no relation has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty() && self.bounds.is_empty()
    }

    /// Declares `var = target`: `var` is rewritten to `target` everywhere.
    pub fn declare_equal(&mut self, var: impl Into<Variable>, target: impl Into<Variable>) {
        let var = self.representative(&var.into());
        let target = self.representative(&target.into());
        if var == target {
            return;
        }
        for (_, existing) in &mut self.aliases {
            if *existing == var {
                *existing = target.clone();
            }
        }
        for (bounded, bound) in &mut self.bounds {
            if *bounded == var {
                *bounded = target.clone();
            }
            if *bound == var {
                *bound = target.clone();
            }
        }
        self.bounds.retain(|(bounded, bound)| bounded != bound);
        self.aliases.push((var, target));
    }

    /// Declares `var ≤ bound`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::RelationCycle`] if `bound` is already known
    /// to be at most `var`; use [`Relations::declare_equal`] for that.
    pub fn declare_bounded(
        &mut self,
        var: impl Into<Variable>,
        bound: impl Into<Variable>,
    ) -> Result<(), GrowthError> {
        let var = self.representative(&var.into());
        let bound = self.representative(&bound.into());
        if var == bound || self.bound_chain(&bound).contains(&var) {
            return Err(GrowthError::RelationCycle(var, bound));
        }
        // One bound per variable; a later declaration replaces the earlier one.
        self.bounds.retain(|(bounded, _)| *bounded != var);
        self.bounds.push((var, bound));
        Ok(())
    }

    /// Builder form of [`Relations::declare_equal`].
    #[must_use]
    pub fn with_equal(mut self, var: impl Into<Variable>, target: impl Into<Variable>) -> Self {
        self.declare_equal(var, target);
        self
    }

    /// Builder form of [`Relations::declare_bounded`].
    ///
    /// # Errors
    ///
    /// See [`Relations::declare_bounded`].
    pub fn with_bounded(
        mut self,
        var: impl Into<Variable>,
        bound: impl Into<Variable>,
    ) -> Result<Self, GrowthError> {
        self.declare_bounded(var, bound)?;
        Ok(self)
    }

    /// The variable `var` is an alias of, or `var` itself.
    #[must_use]
    pub fn representative(&self, var: &Variable) -> Variable {
        self.aliases
            .iter()
            .find(|(alias, _)| alias == var)
            .map_or_else(|| var.clone(), |(_, target)| target.clone())
    }

    /// Rewrites every alias to its representative.
    #[must_use]
    pub fn normalize(&self, growth: &Growth) -> Growth {
        self.aliases
            .iter()
            .fold(growth.clone(), |acc, (alias, target)| acc.substitute(alias, target))
    }

    /// Replaces every bounded variable with its transitive bound.
    fn lift(&self, monomial: &Monomial) -> Monomial {
        let mut lifted = monomial.clone();
        // Bounds are acyclic, so the chain is at most `bounds.len()` long.
        for _ in 0..=self.bounds.len() {
            let next = self
                .bounds
                .iter()
                .fold(lifted.clone(), |acc, (bounded, bound)| acc.substitute(bounded, bound));
            if next == lifted {
                break;
            }
            lifted = next;
        }
        lifted
    }

    fn bound_chain(&self, var: &Variable) -> Vec<Variable> {
        let mut chain = Vec::new();
        let mut current = var.clone();
        while let Some((_, bound)) = self.bounds.iter().find(|(bounded, _)| *bounded == current) {
            if chain.contains(bound) {
                break;
            }
            chain.push(bound.clone());
            current = bound.clone();
        }
        chain
    }
}

/// Decides asymptotic order and reduces sums to their dominant summands.
#[derive(Clone, Debug, Default)]
pub struct Comparator {
    relations: Relations,
}

impl Comparator {
    /// A comparator over independent variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A comparator honouring declared relations.
    #[must_use]
    pub fn with_relations(relations: Relations) -> Self {
        Self { relations }
    }

    /// The declared relations.
    #[must_use]
    pub fn relations(&self) -> &Relations {
        &self.relations
    }

    /// Compares two expressions.
    ///
    /// `f = O(g)` is established when every summand of `f` is `O` of some
    /// summand of `g`. Pairs without such a witness are reported as
    /// incomparable rather than guessed.
    #[must_use]
    pub fn compare(&self, f: &Growth, g: &Growth) -> Dominance {
        let f = self.relations.normalize(f);
        let g = self.relations.normalize(g);
        let at_most = self.sum_at_most(&f, &g);
        let at_least = self.sum_at_most(&g, &f);
        Dominance::from_bounds(at_most, at_least)
    }

    /// Compares two products.
    #[must_use]
    pub fn compare_monomials(&self, f: &Monomial, g: &Monomial) -> Dominance {
        Dominance::from_bounds(self.monomial_at_most(f, g), self.monomial_at_most(g, f))
    }

    /// Reduces a sum to its dominant summands.
    ///
    /// A summand is dropped only when another present summand strictly
    /// dominates it; of several equal summands the first is kept.
    /// Pairwise incomparable summands all survive, so `n + k log k` stays
    /// as written while `n + n²` becomes `n²`.
    #[must_use]
    pub fn simplify_sum(&self, growth: &Growth) -> Growth {
        let growth = self.relations.normalize(growth);
        let mut kept: Vec<Monomial> = Vec::new();
        for term in growth.terms() {
            let absorbed = kept.iter().any(|existing| {
                matches!(
                    self.compare_monomials(term, existing),
                    Dominance::StrictlySlower | Dominance::Equal
                )
            });
            if absorbed {
                continue;
            }
            let first_dominated = kept
                .iter()
                .position(|existing| self.compare_monomials(existing, term).is_slower());
            kept.retain(|existing| !self.compare_monomials(existing, term).is_slower());
            match first_dominated {
                Some(index) => kept.insert(index.min(kept.len()), term.clone()),
                None => kept.push(term.clone()),
            }
        }
        Growth::from_monomials(kept)
    }

    /// `simplify_sum(f + g)`.
    #[must_use]
    pub fn sum(&self, f: &Growth, g: &Growth) -> Growth {
        self.simplify_sum(&f.add(g))
    }

    /// The dominant summands of several expressions.
    ///
    /// Used for branches: the slowest alternatives drop out, incomparable
    /// alternatives are all kept.
    #[must_use]
    pub fn maximum<'a>(&self, alternatives: impl IntoIterator<Item = &'a Growth>) -> Growth {
        let combined = alternatives
            .into_iter()
            .fold(None::<Growth>, |acc, next| match acc {
                None => Some(next.clone()),
                Some(acc) => Some(acc.add(next)),
            });
        combined.map_or_else(Growth::constant, |sum| self.simplify_sum(&sum))
    }

    /// Locates a single product relative to `var^exponent`.
    ///
    /// Other variables are treated as constant factors.
    #[must_use]
    pub fn polynomial_gap(&self, term: &Monomial, var: &Variable, exponent: &Exponent) -> PolyGap {
        let var = self.relations.representative(var);
        let Some(profile) = term.profile(&var) else {
            return match exponent.sign() {
                Some(Ordering::Greater) => PolyGap::Below,
                Some(Ordering::Equal) => PolyGap::Balanced {
                    log_power: Rational::from(0),
                },
                _ => PolyGap::Undecided,
            };
        };
        if !profile.is_polylog() {
            return PolyGap::Above;
        }
        match profile.degree().cmp_exact(exponent) {
            Some(Ordering::Less) => PolyGap::Below,
            Some(Ordering::Greater) => PolyGap::Above,
            Some(Ordering::Equal) => PolyGap::Balanced {
                log_power: profile.log_power().clone(),
            },
            None => PolyGap::Undecided,
        }
    }

    fn sum_at_most(&self, f: &Growth, g: &Growth) -> bool {
        f.terms()
            .iter()
            .all(|lhs| g.terms().iter().any(|rhs| self.monomial_at_most(lhs, rhs)))
    }

    fn monomial_at_most(&self, f: &Monomial, g: &Monomial) -> bool {
        let at_most = |lhs: &Monomial| {
            matches!(
                lhs.compare_pointwise(g),
                Dominance::StrictlySlower | Dominance::Equal
            )
        };
        at_most(f) || (!self.relations.bounds.is_empty() && at_most(&self.relations.lift(f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ordering() {
        let cmp = Comparator::new();
        let chain = [
            Growth::constant(),
            Growth::log("n"),
            Growth::linear("n"),
            Growth::n_log_n("n"),
            Growth::quadratic("n"),
            Growth::exponential("n", 2).unwrap(),
            Growth::exponential("n", 3).unwrap(),
            Growth::factorial("n"),
        ];
        for window in chain.windows(2) {
            assert_eq!(
                cmp.compare(&window[0], &window[1]),
                Dominance::StrictlySlower,
                "{} vs {}",
                window[0],
                window[1]
            );
            assert_eq!(cmp.compare(&window[1], &window[0]), Dominance::StrictlyFaster);
        }
    }

    #[test]
    fn test_independent_variables() {
        let cmp = Comparator::new();
        let nm = Growth::linear("n").multiply(&Growth::linear("m"));
        assert_eq!(cmp.compare(&nm, &Growth::quadratic("n")), Dominance::Incomparable);
        assert_eq!(
            cmp.compare(&Growth::constant(), &Growth::linear("k")),
            Dominance::StrictlySlower
        );
        assert_eq!(
            cmp.compare(&Growth::linear("n"), &Growth::log("k")),
            Dominance::Incomparable
        );
    }

    #[test]
    fn test_simplify_sum() {
        let cmp = Comparator::new();

        let reduced = cmp.sum(&Growth::linear("n"), &Growth::quadratic("n"));
        assert_eq!(reduced.terms().len(), 1);
        assert_eq!(reduced, Growth::quadratic("n"));

        let kept = cmp.simplify_sum(
            &Growth::linear("n")
                .add(&Growth::n_log_n("k"))
                .add(&Growth::linear("n")),
        );
        assert_eq!(kept.terms().len(), 2);
        assert_eq!(kept.to_string(), "O(n + k log k)");
    }

    #[test]
    fn test_powered_log_degrees_are_equal() {
        let cmp = Comparator::new();
        let log2_3 = Growth::raise_to_log("n", &3.into(), &2.into()).unwrap();
        let log4_9 = Growth::raise_to_log("n", &9.into(), &4.into()).unwrap();
        assert_eq!(cmp.compare(&log2_3, &log4_9), Dominance::Equal);
        assert_eq!(cmp.sum(&log2_3, &log4_9).to_string(), "O(n^1.58)");
        assert_eq!(
            cmp.compare(&log4_9, &Growth::n_log_n("n")),
            Dominance::StrictlyFaster
        );
    }

    #[test]
    fn test_simplify_keeps_position() {
        let cmp = Comparator::new();
        let sum = Growth::linear("n")
            .add(&Growth::log("k"))
            .add(&Growth::quadratic("n"));
        assert_eq!(cmp.simplify_sum(&sum).to_string(), "O(n² + log k)");
    }

    #[test]
    fn test_declared_equal() {
        let relations = Relations::new().with_equal("k", "n");
        let cmp = Comparator::with_relations(relations);
        let sum = Growth::linear("n").add(&Growth::n_log_n("k"));
        assert_eq!(cmp.simplify_sum(&sum).to_string(), "O(n log n)");
    }

    #[test]
    fn test_declared_bound() {
        let relations = Relations::new().with_bounded("k", "n").unwrap();
        let cmp = Comparator::with_relations(relations);

        assert_eq!(
            cmp.compare(&Growth::linear("k"), &Growth::linear("n")),
            Dominance::StrictlySlower
        );
        let sum = Growth::linear("n").add(&Growth::linear("k"));
        assert_eq!(cmp.simplify_sum(&sum).to_string(), "O(n)");

        // k log k and n stay independent even with k ≤ n.
        let sum = Growth::linear("n").add(&Growth::n_log_n("k"));
        assert_eq!(cmp.simplify_sum(&sum).to_string(), "O(n + k log k)");

        // n log n absorbs k log k.
        let sum = Growth::n_log_n("n").add(&Growth::n_log_n("k"));
        assert_eq!(cmp.simplify_sum(&sum).to_string(), "O(n log n)");
    }

    #[test]
    fn test_relation_cycles_rejected() {
        let mut relations = Relations::new();
        relations.declare_bounded("k", "n").unwrap();
        assert!(relations.declare_bounded("n", "k").is_err());
        assert!(relations.declare_bounded("n", "n").is_err());
    }

    #[test]
    fn test_sum_comparison() {
        let cmp = Comparator::new();
        let n_plus_k = Growth::linear("n").add(&Growth::linear("k"));
        assert_eq!(
            cmp.compare(&Growth::linear("n"), &n_plus_k),
            Dominance::StrictlySlower
        );
        assert_eq!(cmp.compare(&n_plus_k, &n_plus_k), Dominance::Equal);
    }

    #[test]
    fn test_polynomial_gap() {
        let cmp = Comparator::new();
        let n = Variable::new("n");
        let log2_3 = Exponent::log(3.into(), 2.into()).unwrap();

        let linear_growth = Growth::linear("n");
        let linear = &linear_growth.terms()[0];
        assert_eq!(cmp.polynomial_gap(linear, &n, &log2_3), PolyGap::Below);
        assert_eq!(
            cmp.polynomial_gap(linear, &n, &Exponent::one()),
            PolyGap::Balanced { log_power: 0.into() }
        );

        let n_log_n_growth = Growth::n_log_n("n");
        let n_log_n = &n_log_n_growth.terms()[0];
        assert_eq!(
            cmp.polynomial_gap(n_log_n, &n, &Exponent::one()),
            PolyGap::Balanced { log_power: 1.into() }
        );

        let exp_growth = Growth::exponential("n", 2).unwrap();
        let exp = &exp_growth.terms()[0];
        assert_eq!(cmp.polynomial_gap(exp, &n, &Exponent::integer(5)), PolyGap::Above);

        let constant_growth = Growth::constant();
        let constant = &constant_growth.terms()[0];
        assert_eq!(cmp.polynomial_gap(constant, &n, &Exponent::zero()), PolyGap::Balanced { log_power: 0.into() });
    }
}
