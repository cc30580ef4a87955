//! Structural descriptions of algorithms.

use ordo_growth::Growth;
use ordo_recurrence::Recurrence;
use std::fmt;

/// How many times a loop body runs, as resolved by the caller.
#[derive(Clone, Debug)]
pub enum IterationCount {
    /// A counter stepping by a constant over a range of size `m`: `m`.
    Linear(Growth),
    /// A counter multiplied or divided by a constant over `m`: `log m`.
    Logarithmic(Growth),
    /// An inner loop bounded by the outer index over `m`, counted for the
    /// pair of loops: `(m² − m)/2`, i.e. `m²`.
    Triangular(Growth),
    /// A counter `i` running while `i·i ≤ m`: `m^(1/2)`.
    SquareRoot(Growth),
    /// An already-resolved iteration count.
    Fixed(Growth),
    /// A loop shape the caller could not resolve.
    Unresolved(String),
}

impl IterationCount {
    /// The short shape name used in traces.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            IterationCount::Linear(_) => "linear",
            IterationCount::Logarithmic(_) => "logarithmic",
            IterationCount::Triangular(_) => "triangular",
            IterationCount::SquareRoot(_) => "square-root",
            IterationCount::Fixed(_) => "fixed",
            IterationCount::Unresolved(_) => "unresolved",
        }
    }
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IterationCount::Linear(range)
            | IterationCount::Logarithmic(range)
            | IterationCount::Triangular(range)
            | IterationCount::SquareRoot(range)
            | IterationCount::Fixed(range) => write!(f, "{}({})", self.shape(), range.notation()),
            IterationCount::Unresolved(description) => write!(f, "unresolved({description})"),
        }
    }
}

/// A node of the structural description tree.
///
/// The tree is built by the caller and only read during classification.
#[derive(Clone, Debug)]
pub enum CostNode {
    /// Elementary work of a known growth.
    Leaf(Growth),
    /// Children executed one after another.
    Sequence(Vec<CostNode>),
    /// A condition evaluated once, then exactly one branch.
    Conditional {
        /// Cost of evaluating the condition.
        condition: Box<CostNode>,
        /// The alternatives.
        branches: Vec<CostNode>,
    },
    /// A loop running `iterations` times.
    Loop {
        /// The resolved iteration count.
        iterations: IterationCount,
        /// Cost of one iteration.
        body: Box<CostNode>,
    },
    /// A recursive computation.
    Recursive(Recurrence),
}

impl CostNode {
    /// A leaf of the given growth.
    #[must_use]
    pub fn leaf(growth: Growth) -> Self {
        CostNode::Leaf(growth)
    }

    /// A constant-time leaf.
    #[must_use]
    pub fn unit() -> Self {
        CostNode::Leaf(Growth::constant())
    }

    /// A sequence of children.
    #[must_use]
    pub fn seq(children: impl IntoIterator<Item = CostNode>) -> Self {
        CostNode::Sequence(children.into_iter().collect())
    }

    /// A conditional.
    #[must_use]
    pub fn branch(condition: CostNode, branches: impl IntoIterator<Item = CostNode>) -> Self {
        CostNode::Conditional {
            condition: Box::new(condition),
            branches: branches.into_iter().collect(),
        }
    }

    /// A loop.
    #[must_use]
    pub fn loop_over(iterations: IterationCount, body: CostNode) -> Self {
        CostNode::Loop {
            iterations,
            body: Box::new(body),
        }
    }

    /// A recursive computation.
    #[must_use]
    pub fn recursive(recurrence: Recurrence) -> Self {
        CostNode::Recursive(recurrence)
    }

    /// The node kind used in traces.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            CostNode::Leaf(_) => "leaf",
            CostNode::Sequence(_) => "sequence",
            CostNode::Conditional { .. } => "conditional",
            CostNode::Loop { .. } => "loop",
            CostNode::Recursive(_) => "recursive",
        }
    }

    /// Nesting depth of the tree; a leaf has depth 1.
    ///
    /// Walks the tree with an explicit stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            match node {
                CostNode::Leaf(_) | CostNode::Recursive(_) => {}
                CostNode::Sequence(children) => {
                    stack.extend(children.iter().map(|child| (child, depth + 1)));
                }
                CostNode::Conditional {
                    condition,
                    branches,
                } => {
                    stack.push((condition.as_ref(), depth + 1));
                    stack.extend(branches.iter().map(|child| (child, depth + 1)));
                }
                CostNode::Loop { body, .. } => stack.push((body.as_ref(), depth + 1)),
            }
        }
        deepest
    }
}

impl From<Growth> for CostNode {
    fn from(growth: Growth) -> Self {
        CostNode::Leaf(growth)
    }
}

impl From<Recurrence> for CostNode {
    fn from(recurrence: Recurrence) -> Self {
        CostNode::Recursive(recurrence)
    }
}
