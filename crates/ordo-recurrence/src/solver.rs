//! Recurrence solving.

use ordo_growth::{Comparator, Growth, Monomial};
use std::fmt;
use tracing::{debug, trace};

use crate::master::{self, MasterCase};
use crate::tree::{LevelTrend, RecursionTree};
use crate::{Recurrence, RecurrenceError, Shrink};

/// Options for [`RecurrenceSolver`].
#[derive(Clone, Debug)]
pub struct SolverOptions {
    /// Try the Master Theorem before summing the recursion tree.
    pub use_master_theorem: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            use_master_theorem: true,
        }
    }
}

impl SolverOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the Master Theorem.
    #[must_use]
    pub fn with_master_theorem(mut self, enabled: bool) -> Self {
        self.use_master_theorem = enabled;
        self
    }
}

/// How one work summand was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolutionMethod {
    /// A Master Theorem case.
    Master(MasterCase),
    /// Level-by-level summation of the recursion tree.
    RecursionTree(LevelTrend),
}

impl fmt::Display for SolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionMethod::Master(case) => write!(f, "Master Theorem {case}"),
            SolutionMethod::RecursionTree(trend) => write!(f, "recursion tree, {trend}"),
        }
    }
}

/// The resolution of one work summand.
#[derive(Clone, Debug)]
pub struct SolvedTerm {
    /// The work summand.
    pub term: Monomial,
    /// The rule that resolved it.
    pub method: SolutionMethod,
    /// Its contribution to the total.
    pub growth: Growth,
}

/// A closed form together with how it was derived.
#[derive(Clone, Debug)]
pub struct Solution {
    growth: Growth,
    terms: Vec<SolvedTerm>,
}

impl Solution {
    /// The closed form, reduced to its dominant summands.
    #[must_use]
    pub fn growth(&self) -> &Growth {
        &self.growth
    }

    /// Per-summand derivations, in the order of the work expression.
    #[must_use]
    pub fn terms(&self) -> &[SolvedTerm] {
        &self.terms
    }

    /// Consumes the solution, returning the closed form.
    #[must_use]
    pub fn into_growth(self) -> Growth {
        self.growth
    }

    /// The method behind the dominant summand.
    #[must_use]
    pub fn method(&self) -> Option<SolutionMethod> {
        self.terms
            .iter()
            .find(|solved| {
                solved
                    .growth
                    .terms()
                    .iter()
                    .any(|term| self.growth.terms().contains(term))
            })
            .or_else(|| self.terms.first())
            .map(|solved| solved.method)
    }
}

/// Solves uniform recurrences into closed-form growth expressions.
///
/// Work sums are solved summand by summand: `T(n) = a·T(n/b) + f + g` is
/// bounded by the sum of the solutions for `f` and `g`. Factors in
/// variables other than the recursion variable are constant across levels
/// and carried through unchanged.
#[derive(Clone, Debug, Default)]
pub struct RecurrenceSolver {
    comparator: Comparator,
    options: SolverOptions,
}

impl RecurrenceSolver {
    /// A solver over independent variables with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a comparator with declared variable relations.
    #[must_use]
    pub fn with_comparator(mut self, comparator: Comparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// Sets the solver options.
    #[must_use]
    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    /// The comparator used to reduce sums.
    #[must_use]
    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    /// The solver options.
    #[must_use]
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Solves a recurrence.
    ///
    /// The total is the leaf count times the base-case cost plus the sum
    /// of every work summand over the tree.
    ///
    /// # Errors
    ///
    /// - [`RecurrenceError::MalformedInput`] for invalid parameters
    /// - [`RecurrenceError::UnsupportedRecurrenceShape`] for non-uniform calls
    /// - [`RecurrenceError::UnsolvableRecurrence`] when a level trend cannot
    ///   be decided or the leaf count has no representation
    pub fn solve(&self, recurrence: &Recurrence) -> Result<Solution, RecurrenceError> {
        let (branching, shrink) = recurrence.uniform()?;
        let relations = self.comparator.relations();
        let var = relations.representative(recurrence.variable());
        debug!(%recurrence, a = %branching, "solving recurrence");

        let tree = match &shrink {
            Shrink::Divide(b) => RecursionTree::divide(var, &branching, b)?,
            Shrink::Subtract(c) => RecursionTree::subtract(var, &branching, c)?,
        };
        trace!(leaves = %tree.leaves(), depth = %tree.depth(), "recursion tree");

        let base = relations.normalize(recurrence.base_case());
        let mut total = tree.leaves().multiply(&base);
        let work = self.comparator.simplify_sum(recurrence.work());
        let mut terms = Vec::with_capacity(work.terms().len());
        for term in work.terms() {
            let solved = self.solve_term(&tree, term)?;
            debug!(
                term = %term,
                method = %solved.method,
                growth = %solved.growth,
                "solved work summand"
            );
            total = total.add(&solved.growth);
            terms.push(solved);
        }

        let growth = self.comparator.simplify_sum(&total);
        debug!(%growth, "recurrence solved");
        Ok(Solution { growth, terms })
    }

    fn solve_term(&self, tree: &RecursionTree, term: &Monomial) -> Result<SolvedTerm, RecurrenceError> {
        if self.options.use_master_theorem {
            if let Some(critical) = tree.critical_exponent() {
                if let Some(case) = master::match_case(&self.comparator, term, tree.variable(), critical) {
                    return Ok(SolvedTerm {
                        term: term.clone(),
                        method: SolutionMethod::Master(case),
                        growth: master::closed_form(case, tree, term),
                    });
                }
                trace!(term = %term, "no Master Theorem case, summing levels");
            }
        }

        let trend = tree.trend(term)?;
        Ok(SolvedTerm {
            term: term.clone(),
            method: SolutionMethod::RecursionTree(trend),
            growth: tree.sum(term, trend),
        })
    }
}
