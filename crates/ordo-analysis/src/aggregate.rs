//! Composition rules for sequences, conditionals and loops.

use ordo_growth::{Comparator, Growth, Rational};
use tracing::trace;

use crate::{ClassificationError, IterationCount};

/// Applies the composition rules to already-classified children.
///
/// Every result is reduced to its dominant summands.
#[derive(Clone, Debug, Default)]
pub struct Aggregator {
    comparator: Comparator,
}

impl Aggregator {
    /// An aggregator over independent variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An aggregator reducing sums with the given comparator.
    #[must_use]
    pub fn with_comparator(comparator: Comparator) -> Self {
        Self { comparator }
    }

    /// The comparator used to reduce sums.
    #[must_use]
    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    /// Canonical form of a raw leaf.
    #[must_use]
    pub fn leaf(&self, growth: &Growth) -> Growth {
        self.comparator.simplify_sum(growth)
    }

    /// Children run one after another: their sum, left to right.
    ///
    /// An empty sequence does constant work.
    #[must_use]
    pub fn sequence(&self, children: &[Growth]) -> Growth {
        let Some((first, rest)) = children.split_first() else {
            return Growth::constant();
        };
        let total = rest.iter().fold(first.clone(), |acc, child| acc.add(child));
        self.comparator.simplify_sum(&total)
    }

    /// The condition plus the dominant branch.
    ///
    /// Branches that are strictly slower than another drop out; equal
    /// branches keep one representative and incomparable branches are all
    /// retained additively.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError::MalformedInput`] for a conditional
    /// without branches.
    pub fn conditional(
        &self,
        condition: &Growth,
        branches: &[Growth],
    ) -> Result<Growth, ClassificationError> {
        if branches.is_empty() {
            return Err(ClassificationError::MalformedInput(
                "conditional has no branches".to_string(),
            ));
        }
        let dominant = self.comparator.maximum(branches);
        trace!(%dominant, "dominant branch");
        Ok(self.comparator.sum(condition, &dominant))
    }

    /// The number of iterations an iteration-count shape stands for.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError::UnsupportedStructure`] for unresolved
    /// shapes and for counts outside the growth families, such as
    /// `log(log n)`.
    pub fn iterations(&self, count: &IterationCount) -> Result<Growth, ClassificationError> {
        let growth = match count {
            IterationCount::Linear(range) | IterationCount::Fixed(range) => range.clone(),
            IterationCount::Logarithmic(range) => range.logarithm()?,
            // Σ_{i<m} i = (m² − m)/2; the dependent inner loop is counted once.
            IterationCount::Triangular(range) => range.pow(&Rational::integer(2))?,
            IterationCount::SquareRoot(range) => range.pow(&Rational::from_i64(1, 2))?,
            IterationCount::Unresolved(description) => {
                return Err(ClassificationError::UnsupportedStructure(format!(
                    "unresolved iteration count `{description}`"
                )))
            }
        };
        Ok(self.comparator.simplify_sum(&growth))
    }

    /// A loop: resolved iteration count times body cost.
    #[must_use]
    pub fn repeat(&self, iterations: &Growth, body: &Growth) -> Growth {
        trace!(%iterations, %body, "loop");
        self.comparator.simplify_sum(&iterations.multiply(body))
    }
}
