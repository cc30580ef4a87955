//! Elementary growth terms.

use ordo_numeric::{Exponent, Rational};
use std::fmt;

use crate::Variable;

/// The elementary growth families, in strictly increasing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GrowthKind {
    /// Bounded by a constant.
    Constant,
    /// `log^k n`
    Logarithmic,
    /// `n^d` for a positive degree `d`.
    Polynomial,
    /// `b^n` for a base `b > 1`.
    Exponential,
    /// `n!`
    Factorial,
}

impl fmt::Display for GrowthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GrowthKind::Constant => "constant",
            GrowthKind::Logarithmic => "logarithmic",
            GrowthKind::Polynomial => "polynomial",
            GrowthKind::Exponential => "exponential",
            GrowthKind::Factorial => "factorial",
        };
        f.write_str(name)
    }
}

/// The atomic unit of a growth expression: one kind over one variable.
///
/// A constant term carries no variable and no degree by construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GrowthTerm {
    /// `1`
    Constant,
    /// `log^power var`
    Logarithmic {
        /// The size variable.
        var: Variable,
        /// Power of the logarithm, usually 1.
        power: Rational,
    },
    /// `var^degree`
    Polynomial {
        /// The size variable.
        var: Variable,
        /// The (possibly irrational) degree.
        degree: Exponent,
    },
    /// `base^var`
    Exponential {
        /// The size variable.
        var: Variable,
        /// The base, greater than 1.
        base: Rational,
    },
    /// `(var!)^power`
    Factorial {
        /// The size variable.
        var: Variable,
        /// Power of the factorial, usually 1.
        power: Rational,
    },
}

impl GrowthTerm {
    /// The family this term belongs to.
    #[must_use]
    pub fn kind(&self) -> GrowthKind {
        match self {
            GrowthTerm::Constant => GrowthKind::Constant,
            GrowthTerm::Logarithmic { .. } => GrowthKind::Logarithmic,
            GrowthTerm::Polynomial { .. } => GrowthKind::Polynomial,
            GrowthTerm::Exponential { .. } => GrowthKind::Exponential,
            GrowthTerm::Factorial { .. } => GrowthKind::Factorial,
        }
    }

    /// The variable the term grows in, `None` for constants.
    #[must_use]
    pub fn variable(&self) -> Option<&Variable> {
        match self {
            GrowthTerm::Constant => None,
            GrowthTerm::Logarithmic { var, .. }
            | GrowthTerm::Polynomial { var, .. }
            | GrowthTerm::Exponential { var, .. }
            | GrowthTerm::Factorial { var, .. } => Some(var),
        }
    }
}
