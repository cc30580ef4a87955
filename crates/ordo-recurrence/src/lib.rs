//! # ordo-recurrence
//!
//! Closed forms for recurrences of the shape `T(n) = a·T(n/b) + f(n)`
//! and `T(n) = a·T(n − c) + f(n)`.
//!
//! ## Method
//!
//! Divide-and-conquer recurrences go through the Master Theorem first:
//! 1. Compute the leaf count `n^(log_b a)` exactly
//! 2. Locate every summand of `f` relative to it (polynomial gap)
//! 3. Apply Case 1, 2 or 3 (with the regularity check)
//!
//! Summands that fall between the cases, such as `n^(log_b a) · log^k n`,
//! are summed level by level over the recursion tree instead.
//! Decrease-and-conquer recurrences are always summed over the tree.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod master;
pub mod recurrence;
pub mod solver;
pub mod tree;

pub use error::RecurrenceError;
pub use master::MasterCase;
pub use recurrence::{Recurrence, Shrink, Subproblem};
pub use solver::{RecurrenceSolver, Solution, SolutionMethod, SolvedTerm, SolverOptions};
pub use tree::{LevelTrend, RecursionTree};

#[cfg(test)]
mod proptests;
