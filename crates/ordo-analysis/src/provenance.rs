//! Provenance traces: which rule produced which growth, where.

use ordo_growth::Growth;
use ordo_recurrence::SolutionMethod;
use smallvec::SmallVec;
use std::fmt;

/// One step from a node to one of its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The i-th child of a sequence.
    Sequence(usize),
    /// The condition of a conditional.
    Condition,
    /// The i-th branch of a conditional.
    Branch(usize),
    /// The body of a loop.
    Body,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Sequence(index) => write!(f, ".seq[{index}]"),
            Segment::Condition => f.write_str(".if.cond"),
            Segment::Branch(index) => write!(f, ".if.branch[{index}]"),
            Segment::Body => f.write_str(".loop.body"),
        }
    }
}

/// Location of a node, rendered as `$`, `$.seq[1]`, `$.loop.body`, …
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    segments: SmallVec<[Segment; 8]>,
}

impl NodePath {
    /// The root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// The path of a child.
    #[must_use]
    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// The steps from the root.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of steps from the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns true for the root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// A composition rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    /// A raw growth leaf, reduced to canonical form.
    Leaf,
    /// Sum of the children.
    Sequence {
        /// Number of children.
        children: usize,
    },
    /// Condition cost plus the dominant branch.
    Conditional {
        /// Number of branches.
        branches: usize,
    },
    /// Iteration count times body cost.
    Loop {
        /// The iteration-count shape.
        shape: &'static str,
    },
    /// One work summand of a recurrence.
    RecurrenceTerm(SolutionMethod),
    /// The closed form of a recurrence.
    Recurrence,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Leaf => f.write_str("leaf"),
            Rule::Sequence { children } => write!(f, "sequence of {children}"),
            Rule::Conditional { branches } => write!(f, "conditional over {branches} branches"),
            Rule::Loop { shape } => write!(f, "{shape} loop"),
            Rule::RecurrenceTerm(method) => write!(f, "recurrence summand by {method}"),
            Rule::Recurrence => f.write_str("recurrence"),
        }
    }
}

/// One applied rule.
#[derive(Clone, Debug)]
pub struct Step {
    /// Where the rule was applied.
    pub path: NodePath,
    /// The rule.
    pub rule: Rule,
    /// The growth it produced.
    pub result: Growth,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.path, self.rule, self.result)
    }
}

/// The ordered list of applied rules, children before parents.
#[derive(Clone, Debug, Default)]
pub struct Provenance {
    steps: Vec<Step>,
}

impl Provenance {
    /// An empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub fn record(&mut self, path: NodePath, rule: Rule, result: Growth) {
        self.steps.push(Step { path, rule, result });
    }

    /// The steps in application order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no rule was applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The last step recorded at `path`.
    #[must_use]
    pub fn at(&self, path: &NodePath) -> Option<&Step> {
        self.steps.iter().rev().find(|step| step.path == *path)
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}
