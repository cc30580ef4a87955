//! Classification errors.

use ordo_growth::GrowthError;
use ordo_recurrence::RecurrenceError;
use thiserror::Error;

use crate::{NodePath, Provenance};

/// Why a structural description could not be classified.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("unsupported structure: {0}")]
    UnsupportedStructure(String),

    #[error("unsolvable recurrence: {0}")]
    UnsolvableRecurrence(String),

    #[error("unsupported recurrence shape: {0}")]
    UnsupportedRecurrenceShape(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("nesting exceeds the depth limit of {limit}")]
    NestingTooDeep { limit: usize },
}

impl From<RecurrenceError> for ClassificationError {
    fn from(err: RecurrenceError) -> Self {
        match err {
            RecurrenceError::MalformedInput(msg) => ClassificationError::MalformedInput(msg),
            RecurrenceError::UnsupportedRecurrenceShape(msg) => {
                ClassificationError::UnsupportedRecurrenceShape(msg)
            }
            RecurrenceError::UnsolvableRecurrence(msg) => {
                ClassificationError::UnsolvableRecurrence(msg)
            }
            RecurrenceError::Growth(err) => err.into(),
        }
    }
}

impl From<GrowthError> for ClassificationError {
    fn from(err: GrowthError) -> Self {
        match err {
            GrowthError::UnsupportedComposition(msg) => ClassificationError::UnsupportedStructure(msg),
            other => ClassificationError::MalformedInput(other.to_string()),
        }
    }
}

/// A failed classification: the error, where it happened, and the rules
/// applied before it.
#[derive(Clone, Debug, Error)]
#[error("{error} at {path}")]
pub struct ClassificationFailure {
    /// What went wrong.
    pub error: ClassificationError,
    /// The node at which classification stopped.
    pub path: NodePath,
    /// Every rule applied before the failure.
    pub trace: Provenance,
}
