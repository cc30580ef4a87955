//! # Ordo
//!
//! Symbolic classification of an algorithm's operation count into its
//! tight asymptotic growth class.
//!
//! Ordo takes a structural description of an algorithm (sequences,
//! conditionals, loops and recursive calls over elementary costs) and
//! reduces it to a canonical Big-O expression over one or more named size
//! variables, together with a trace of the rules that produced it.
//!
//! ## Features
//!
//! - **Growth Algebra**: constant, logarithmic, polynomial (exact real
//!   degrees such as `log_2 3`), exponential and factorial families
//! - **Partial Order**: independent variables stay incomparable unless
//!   related, so `n + k log k` is never collapsed by accident
//! - **Recurrences**: Master Theorem with recursion-tree fallback, and
//!   decrease-and-conquer recurrences
//! - **Provenance**: every applied rule is recorded with its location
//!
//! ## Quick Start
//!
//! ```rust
//! use ordo::prelude::*;
//!
//! let merge_sort = CostNode::recursive(Recurrence::divide("n", 2, 2, Growth::linear("n")));
//! let classification = Classifier::new().classify(&merge_sort).unwrap();
//! assert_eq!(classification.growth.to_string(), "O(n log n)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ordo_analysis as analysis;
pub use ordo_growth as growth;
pub use ordo_numeric as numeric;
pub use ordo_recurrence as recurrence;

pub use ordo_analysis::classify;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ordo_analysis::{
        classify, Classification, ClassificationError, ClassificationFailure, Classifier,
        ClassifierConfig, CostNode, IterationCount, NodePath, Provenance, Rule,
    };
    pub use ordo_growth::{Comparator, Dominance, Growth, GrowthKind, Relations, Variable};
    pub use ordo_numeric::{Exponent, Rational};
    pub use ordo_recurrence::{Recurrence, RecurrenceSolver, SolverOptions, Subproblem};
}
