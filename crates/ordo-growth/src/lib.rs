//! # ordo-growth
//!
//! Symbolic growth classes for asymptotic analysis.
//!
//! This crate provides:
//! - Elementary growth terms (constant, logarithmic, polynomial,
//!   exponential, factorial) over named size variables
//! - Growth expressions: sums of products of terms, with multiplication,
//!   addition, powers, logarithms and composition
//! - A dominance comparator deciding asymptotic order and reducing sums
//!   to their dominant summands
//!
//! ## Canonical form
//!
//! Every variable in a product carries a single [`Profile`]
//! `(n!)^f · b^n · n^d · log^k n`. Profiles compare lexicographically on
//! `(f, b, d, k)`; products over several variables compare pointwise and
//! are incomparable when the pointwise verdicts disagree.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compare;
pub mod display;
pub mod error;
pub mod expr;
pub mod monomial;
pub mod profile;
pub mod term;
pub mod variable;

#[cfg(test)]
mod proptests;

pub use compare::{Comparator, Dominance, PolyGap, Relations};
pub use error::GrowthError;
pub use expr::Growth;
pub use monomial::Monomial;
pub use profile::Profile;
pub use term::{GrowthKind, GrowthTerm};
pub use variable::Variable;

pub use ordo_numeric::{Exponent, Rational};
