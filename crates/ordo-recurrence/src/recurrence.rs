//! Recurrence descriptions.
//!
//! A recurrence is a list of recursive calls plus the non-recursive work
//! done by one invocation:
//!
//! ```text
//! T(n) = a₁·T(shrink₁(n)) + … + aₖ·T(shrinkₖ(n)) + f(n)
//! ```
//!
//! Only uniform recurrences can be solved; calls that share a shrink are
//! merged into a single branching factor.

use num_traits::{One, Zero};
use ordo_growth::{Growth, Variable};
use ordo_numeric::Rational;
use std::fmt;

use crate::RecurrenceError;

/// How the argument of a recursive call relates to `n`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shrink {
    /// The call is on `n / b` (divide and conquer).
    Divide(Rational),
    /// The call is on `n − c` (decrease and conquer).
    Subtract(Rational),
}

impl Shrink {
    fn validate(&self) -> Result<(), RecurrenceError> {
        match self {
            Shrink::Divide(b) if *b <= Rational::one() => Err(RecurrenceError::MalformedInput(
                format!("shrink factor b must exceed 1, got {b}"),
            )),
            Shrink::Subtract(c) if !c.is_positive() => Err(RecurrenceError::MalformedInput(
                format!("decrement c must be positive, got {c}"),
            )),
            _ => Ok(()),
        }
    }

    fn render(&self, var: &Variable) -> String {
        match self {
            Shrink::Divide(b) => format!("{var}/{b}"),
            Shrink::Subtract(c) => format!("{var}-{c}"),
        }
    }
}

/// One group of identical recursive calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subproblem {
    count: Rational,
    shrink: Shrink,
}

impl Subproblem {
    /// `count` calls with the given shrink.
    #[must_use]
    pub fn new(count: impl Into<Rational>, shrink: Shrink) -> Self {
        Self {
            count: count.into(),
            shrink,
        }
    }

    /// `count` calls on `n / b`.
    #[must_use]
    pub fn divide(count: impl Into<Rational>, b: impl Into<Rational>) -> Self {
        Self::new(count, Shrink::Divide(b.into()))
    }

    /// `count` calls on `n − c`.
    #[must_use]
    pub fn subtract(count: impl Into<Rational>, c: impl Into<Rational>) -> Self {
        Self::new(count, Shrink::Subtract(c.into()))
    }

    /// Number of calls.
    #[must_use]
    pub fn count(&self) -> &Rational {
        &self.count
    }

    /// Argument of each call.
    #[must_use]
    pub fn shrink(&self) -> &Shrink {
        &self.shrink
    }
}

/// A recurrence `T(n) = Σ aᵢ·T(shrinkᵢ(n)) + f(n)` with a base-case cost.
#[derive(Clone, Debug)]
pub struct Recurrence {
    var: Variable,
    subproblems: Vec<Subproblem>,
    work: Growth,
    base_case: Growth,
}

impl Recurrence {
    /// A recurrence over `var` with a constant base case.
    #[must_use]
    pub fn new(
        var: impl Into<Variable>,
        subproblems: impl IntoIterator<Item = Subproblem>,
        work: Growth,
    ) -> Self {
        Self {
            var: var.into(),
            subproblems: subproblems.into_iter().collect(),
            work,
            base_case: Growth::constant(),
        }
    }

    /// `T(n) = a·T(n/b) + f(n)`.
    #[must_use]
    pub fn divide(
        var: impl Into<Variable>,
        a: impl Into<Rational>,
        b: impl Into<Rational>,
        work: Growth,
    ) -> Self {
        Self::new(var, [Subproblem::divide(a, b)], work)
    }

    /// `T(n) = a·T(n − c) + f(n)`.
    #[must_use]
    pub fn subtract(
        var: impl Into<Variable>,
        a: impl Into<Rational>,
        c: impl Into<Rational>,
        work: Growth,
    ) -> Self {
        Self::new(var, [Subproblem::subtract(a, c)], work)
    }

    /// Sets the cost of one base-case invocation.
    #[must_use]
    pub fn with_base_case(mut self, base_case: Growth) -> Self {
        self.base_case = base_case;
        self
    }

    /// The recursion variable.
    #[must_use]
    pub fn variable(&self) -> &Variable {
        &self.var
    }

    /// The recursive calls.
    #[must_use]
    pub fn subproblems(&self) -> &[Subproblem] {
        &self.subproblems
    }

    /// Non-recursive work per invocation.
    #[must_use]
    pub fn work(&self) -> &Growth {
        &self.work
    }

    /// Cost of one base-case invocation.
    #[must_use]
    pub fn base_case(&self) -> &Growth {
        &self.base_case
    }

    /// Validates the recurrence and merges its calls into `(a, shrink)`.
    ///
    /// # Errors
    ///
    /// - [`RecurrenceError::MalformedInput`] when there are no calls, a
    ///   count is not positive, `b ≤ 1`, `c ≤ 0`, the merged `a < 1`, or
    ///   the base case grows with the recursion variable.
    /// - [`RecurrenceError::UnsupportedRecurrenceShape`] when calls shrink
    ///   the input differently.
    pub fn uniform(&self) -> Result<(Rational, Shrink), RecurrenceError> {
        let Some(first) = self.subproblems.first() else {
            return Err(RecurrenceError::MalformedInput(
                "recurrence has no recursive calls".to_string(),
            ));
        };

        let mut branching = Rational::zero();
        for subproblem in &self.subproblems {
            subproblem.shrink.validate()?;
            if !subproblem.count.is_positive() {
                return Err(RecurrenceError::MalformedInput(format!(
                    "call count must be positive, got {}",
                    subproblem.count
                )));
            }
            if subproblem.shrink != first.shrink {
                return Err(RecurrenceError::UnsupportedRecurrenceShape(format!(
                    "calls on {} and {} shrink the input differently",
                    first.shrink.render(&self.var),
                    subproblem.shrink.render(&self.var)
                )));
            }
            branching = branching + &subproblem.count;
        }

        if branching < Rational::one() {
            return Err(RecurrenceError::MalformedInput(format!(
                "branching factor a must be at least 1, got {branching}"
            )));
        }
        if self.base_case.depends_on(&self.var) {
            return Err(RecurrenceError::MalformedInput(format!(
                "base case {} grows with {}",
                self.base_case, self.var
            )));
        }
        Ok((branching, first.shrink.clone()))
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T({}) = ", self.var)?;
        for (index, subproblem) in self.subproblems.iter().enumerate() {
            if index > 0 {
                f.write_str(" + ")?;
            }
            if !subproblem.count.is_one() {
                write!(f, "{}·", subproblem.count)?;
            }
            write!(f, "T({})", subproblem.shrink.render(&self.var))?;
        }
        write!(f, " + {}", self.work.notation())
    }
}
