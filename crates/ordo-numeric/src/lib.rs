//! # ordo-numeric
//!
//! Exact numbers for asymptotic growth classification.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//! - Real exponents closed under `log_b a` (`Exponent`)
//!
//! Polynomial degrees produced by the Master Theorem are usually
//! irrational (`log_2 3`), so they are kept symbolically and compared
//! exactly through integer powers instead of being truncated to floats.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod exponent;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use exponent::{Exponent, LogRatio};
pub use integer::Integer;
pub use rational::Rational;
