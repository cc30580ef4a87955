//! # ordo-analysis
//!
//! Classification of structural program descriptions into growth classes.
//!
//! A [`CostNode`] tree describes an algorithm as sequences, conditionals,
//! loops and recursive calls over raw growth leaves. The [`Classifier`]
//! walks the tree bottom-up, applies one composition rule per node and
//! records each application in a [`Provenance`] trace:
//!
//! - Sequence: sum of the children, reduced to the dominant summands
//! - Conditional: condition cost plus the dominant branch
//! - Loop: iteration count times body cost, with triangular loops
//!   counted as `m²` rather than `m·m` over unrelated counters
//! - Recursive: closed form from the recurrence solver
//!
//! ## Example
//!
//! ```
//! use ordo_analysis::{classify, CostNode, IterationCount};
//! use ordo_growth::Growth;
//!
//! let nested = CostNode::loop_over(
//!     IterationCount::Linear(Growth::linear("n")),
//!     CostNode::loop_over(IterationCount::Linear(Growth::linear("m")), CostNode::unit()),
//! );
//! assert_eq!(classify(&nested).unwrap().to_string(), "O(n·m)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod node;
pub mod provenance;

pub use aggregate::Aggregator;
pub use classifier::{classify, Classification, Classifier, ClassifierConfig, DEFAULT_MAX_DEPTH};
pub use error::{ClassificationError, ClassificationFailure};
pub use node::{CostNode, IterationCount};
pub use provenance::{NodePath, Provenance, Rule, Segment, Step};

#[cfg(test)]
mod proptests;
