//! Errors raised by the growth algebra.

use ordo_numeric::{Exponent, Rational};
use thiserror::Error;

use crate::Variable;

/// Errors that can occur while building or transforming growth expressions.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GrowthError {
    #[error("polynomial degree must be non-negative, got {0}")]
    NegativeDegree(Exponent),

    #[error("exponential base must be greater than 1, got {0}")]
    InvalidBase(Rational),

    #[error("logarithm power must be non-negative, got {0}")]
    NegativeLogPower(Rational),

    #[error("factorial power must be non-negative, got {0}")]
    NegativeFactorialPower(Rational),

    #[error("cannot raise a growth expression to the negative power {0}")]
    NegativePower(Rational),

    #[error("result leaves the supported growth families: {0}")]
    UnsupportedComposition(String),

    #[error("relating {0} to {1} would form a cycle")]
    RelationCycle(Variable, Variable),
}
