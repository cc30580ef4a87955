//! The classification driver.
//!
//! A top-down descent over the [`CostNode`] tree that combines child
//! results bottom-up. The walk carries no shared mutable state besides the
//! trace of the request it serves, so independent requests classify in
//! parallel.

use ordo_growth::{Comparator, Growth, Relations};
use ordo_recurrence::{Recurrence, RecurrenceSolver, SolverOptions};
use rayon::prelude::*;
use tracing::{debug, debug_span};

use crate::{
    Aggregator, ClassificationError, ClassificationFailure, CostNode, NodePath, Provenance, Rule,
    Segment,
};

/// Default bound on the nesting depth of a description.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for [`Classifier`].
#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    /// Deepest nesting accepted before failing with
    /// [`ClassificationError::NestingTooDeep`].
    pub max_depth: usize,
    /// Declared relations between size variables.
    pub relations: Relations,
    /// Recurrence solver options.
    pub solver: SolverOptions,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            relations: Relations::new(),
            solver: SolverOptions::default(),
        }
    }
}

impl ClassifierConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the nesting depth limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the variable relations.
    #[must_use]
    pub fn with_relations(mut self, relations: Relations) -> Self {
        self.relations = relations;
        self
    }

    /// Sets the recurrence solver options.
    #[must_use]
    pub fn with_solver_options(mut self, solver: SolverOptions) -> Self {
        self.solver = solver;
        self
    }
}

/// A successful classification.
#[derive(Clone, Debug)]
pub struct Classification {
    /// The canonical growth class of the whole description.
    pub growth: Growth,
    /// Every rule applied, children before parents.
    pub trace: Provenance,
}

/// Where a walk stopped and why.
struct Fault {
    error: ClassificationError,
    path: NodePath,
}

/// Classifies structural descriptions.
#[derive(Clone, Debug)]
pub struct Classifier {
    aggregator: Aggregator,
    solver: RecurrenceSolver,
    max_depth: usize,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_config(ClassifierConfig::default())
    }
}

impl Classifier {
    /// A classifier with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A classifier with a custom configuration.
    #[must_use]
    pub fn with_config(config: ClassifierConfig) -> Self {
        let comparator = Comparator::with_relations(config.relations);
        Self {
            solver: RecurrenceSolver::new()
                .with_comparator(comparator.clone())
                .with_options(config.solver),
            aggregator: Aggregator::with_comparator(comparator),
            max_depth: config.max_depth,
        }
    }

    /// The comparator shared by every rule.
    #[must_use]
    pub fn comparator(&self) -> &Comparator {
        self.aggregator.comparator()
    }

    /// Classifies one description.
    ///
    /// # Errors
    ///
    /// Returns a [`ClassificationFailure`] naming the node at which
    /// classification stopped and the trace up to that point.
    pub fn classify(&self, root: &CostNode) -> Result<Classification, ClassificationFailure> {
        let span = debug_span!("classify", kind = root.kind(), depth = root.depth());
        let _guard = span.enter();

        let mut trace = Provenance::new();
        match self.visit(root, &NodePath::root(), &mut trace) {
            Ok(growth) => {
                debug!(%growth, steps = trace.len(), "classified");
                Ok(Classification { growth, trace })
            }
            Err(Fault { error, path }) => {
                debug!(%error, %path, "classification failed");
                Err(ClassificationFailure { error, path, trace })
            }
        }
    }

    /// Classifies independent descriptions in parallel.
    ///
    /// Results are in input order.
    #[must_use]
    pub fn classify_batch(
        &self,
        roots: &[CostNode],
    ) -> Vec<Result<Classification, ClassificationFailure>> {
        roots.par_iter().map(|root| self.classify(root)).collect()
    }

    fn visit(&self, node: &CostNode, path: &NodePath, trace: &mut Provenance) -> Result<Growth, Fault> {
        if path.depth() >= self.max_depth {
            return Err(Fault {
                error: ClassificationError::NestingTooDeep {
                    limit: self.max_depth,
                },
                path: path.clone(),
            });
        }

        let (rule, growth) = match node {
            CostNode::Leaf(growth) => (Rule::Leaf, self.aggregator.leaf(growth)),
            CostNode::Sequence(children) => {
                let mut costs = Vec::with_capacity(children.len());
                for (index, child) in children.iter().enumerate() {
                    costs.push(self.visit(child, &path.child(Segment::Sequence(index)), trace)?);
                }
                let rule = Rule::Sequence {
                    children: children.len(),
                };
                (rule, self.aggregator.sequence(&costs))
            }
            CostNode::Conditional {
                condition,
                branches,
            } => {
                let condition = self.visit(condition, &path.child(Segment::Condition), trace)?;
                let mut costs = Vec::with_capacity(branches.len());
                for (index, branch) in branches.iter().enumerate() {
                    costs.push(self.visit(branch, &path.child(Segment::Branch(index)), trace)?);
                }
                let growth = self
                    .aggregator
                    .conditional(&condition, &costs)
                    .map_err(|error| fault(error, path))?;
                let rule = Rule::Conditional {
                    branches: branches.len(),
                };
                (rule, growth)
            }
            CostNode::Loop { iterations, body } => {
                // The count is resolved before descending into the body.
                let count = self
                    .aggregator
                    .iterations(iterations)
                    .map_err(|error| fault(error, path))?;
                let body = self.visit(body, &path.child(Segment::Body), trace)?;
                let rule = Rule::Loop {
                    shape: iterations.shape(),
                };
                (rule, self.aggregator.repeat(&count, &body))
            }
            CostNode::Recursive(recurrence) => {
                (Rule::Recurrence, self.solve(recurrence, path, trace)?)
            }
        };

        debug!(%path, %rule, %growth, "rule applied");
        trace.record(path.clone(), rule, growth.clone());
        Ok(growth)
    }

    fn solve(&self, recurrence: &Recurrence, path: &NodePath, trace: &mut Provenance) -> Result<Growth, Fault> {
        let solution = self
            .solver
            .solve(recurrence)
            .map_err(|error| fault(error.into(), path))?;
        for solved in solution.terms() {
            trace.record(
                path.clone(),
                Rule::RecurrenceTerm(solved.method),
                solved.growth.clone(),
            );
        }
        Ok(solution.into_growth())
    }
}

fn fault(error: ClassificationError, path: &NodePath) -> Fault {
    Fault {
        error,
        path: path.clone(),
    }
}

/// Classifies a description with the default configuration.
///
/// # Errors
///
/// Returns the [`ClassificationError`] of the failing node; use
/// [`Classifier::classify`] for its location and the partial trace.
pub fn classify(root: &CostNode) -> Result<Growth, ClassificationError> {
    Classifier::new()
        .classify(root)
        .map(|classification| classification.growth)
        .map_err(|failure| failure.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IterationCount;
    use ordo_growth::Dominance;
    use ordo_recurrence::SolutionMethod;

    fn linear(var: &str) -> IterationCount {
        IterationCount::Linear(Growth::linear(var))
    }

    #[test]
    fn test_triangular_loop() {
        let node = CostNode::loop_over(IterationCount::Triangular(Growth::linear("n")), CostNode::unit());
        assert_eq!(classify(&node).unwrap().to_string(), "O(n²)");
    }

    #[test]
    fn test_independent_nested_loops() {
        let node = CostNode::loop_over(linear("n"), CostNode::loop_over(linear("m"), CostNode::unit()));
        let growth = classify(&node).unwrap();
        assert_eq!(growth.to_string(), "O(n·m)");
        assert_eq!(
            Comparator::new().compare(&growth, &Growth::quadratic("n")),
            Dominance::Incomparable
        );

        let related = Classifier::with_config(
            ClassifierConfig::new().with_relations(Relations::new().with_equal("m", "n")),
        );
        let growth = related.classify(&node).unwrap().growth;
        assert_eq!(growth.to_string(), "O(n²)");
    }

    #[test]
    fn test_sequence_drops_dominated() {
        let node = CostNode::seq([
            CostNode::loop_over(linear("n"), CostNode::unit()),
            CostNode::loop_over(linear("n"), CostNode::loop_over(linear("n"), CostNode::unit())),
        ]);
        assert_eq!(classify(&node).unwrap().to_string(), "O(n²)");
    }

    #[test]
    fn test_subset_shape_stays_additive() {
        let node = CostNode::seq([
            CostNode::leaf(Growth::linear("n")),
            CostNode::leaf(Growth::n_log_n("k")),
            CostNode::leaf(Growth::linear("n")),
        ]);
        assert_eq!(classify(&node).unwrap().to_string(), "O(n + k log k)");

        let related = Classifier::with_config(
            ClassifierConfig::new().with_relations(Relations::new().with_equal("k", "n")),
        );
        assert_eq!(related.classify(&node).unwrap().growth.to_string(), "O(n log n)");
    }

    #[test]
    fn test_recursive_node() {
        let merge_sort = CostNode::seq([
            CostNode::recursive(Recurrence::divide("n", 2, 2, Growth::linear("n"))),
            CostNode::loop_over(linear("n"), CostNode::unit()),
        ]);
        let classification = Classifier::new().classify(&merge_sort).unwrap();
        assert_eq!(classification.growth.to_string(), "O(n log n)");

        let recurrence_path = NodePath::root().child(Segment::Sequence(0));
        let steps: Vec<_> = classification
            .trace
            .steps()
            .iter()
            .filter(|step| step.path == recurrence_path)
            .collect();
        assert_eq!(steps.len(), 2);
        assert!(matches!(steps[0].rule, Rule::RecurrenceTerm(SolutionMethod::Master(_))));
        assert_eq!(steps[1].rule, Rule::Recurrence);
    }

    #[test]
    fn test_trace_is_post_order() {
        let node = CostNode::loop_over(
            linear("n"),
            CostNode::branch(CostNode::unit(), [CostNode::unit(), CostNode::leaf(Growth::log("n"))]),
        );
        let classification = Classifier::new().classify(&node).unwrap();
        let rendered: Vec<String> = classification
            .trace
            .steps()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rendered,
            vec![
                "$.loop.body.if.cond: leaf -> O(1)",
                "$.loop.body.if.branch[0]: leaf -> O(1)",
                "$.loop.body.if.branch[1]: leaf -> O(log n)",
                "$.loop.body: conditional over 2 branches -> O(log n)",
                "$: linear loop -> O(n log n)",
            ]
        );
    }

    #[test]
    fn test_failure_location() {
        let node = CostNode::seq([
            CostNode::unit(),
            CostNode::loop_over(IterationCount::Unresolved("while x".into()), CostNode::unit()),
        ]);
        let failure = Classifier::new().classify(&node).unwrap_err();
        assert!(matches!(failure.error, ClassificationError::UnsupportedStructure(_)));
        assert_eq!(failure.path.to_string(), "$.seq[1]");
        assert_eq!(failure.trace.len(), 1);
        assert_eq!(failure.to_string().split(" at ").last(), Some("$.seq[1]"));
    }

    #[test]
    fn test_malformed_recurrence() {
        let node = CostNode::recursive(Recurrence::divide("n", 2, 1, Growth::linear("n")));
        assert!(matches!(classify(&node), Err(ClassificationError::MalformedInput(_))));

        let empty = CostNode::branch(CostNode::unit(), Vec::new());
        assert!(matches!(classify(&empty), Err(ClassificationError::MalformedInput(_))));
    }

    #[test]
    fn test_depth_limit() {
        let mut node = CostNode::unit();
        for _ in 0..10 {
            node = CostNode::loop_over(IterationCount::Fixed(Growth::constant()), node);
        }
        let shallow = Classifier::with_config(ClassifierConfig::new().with_max_depth(5));
        let failure = shallow.classify(&node).unwrap_err();
        assert_eq!(failure.error, ClassificationError::NestingTooDeep { limit: 5 });
        assert_eq!(failure.path.depth(), 5);
        assert!(Classifier::new().classify(&node).is_ok());
    }

    #[test]
    fn test_batch_preserves_order() {
        let roots = vec![
            CostNode::loop_over(linear("n"), CostNode::unit()),
            CostNode::loop_over(IterationCount::Unresolved("?".into()), CostNode::unit()),
            CostNode::loop_over(IterationCount::Triangular(Growth::linear("n")), CostNode::unit()),
        ];
        let results = Classifier::new().classify_batch(&roots);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().growth.to_string(), "O(n)");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().growth.to_string(), "O(n²)");
    }
}
