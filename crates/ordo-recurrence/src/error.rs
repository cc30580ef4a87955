//! Errors raised while solving recurrences.

use ordo_growth::GrowthError;
use thiserror::Error;

/// Errors that can occur while solving a recurrence.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("malformed recurrence: {0}")]
    MalformedInput(String),

    #[error("unsupported recurrence shape: {0}")]
    UnsupportedRecurrenceShape(String),

    #[error("no closed form found: {0}")]
    UnsolvableRecurrence(String),

    #[error(transparent)]
    Growth(#[from] GrowthError),
}
