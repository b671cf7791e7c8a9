//! Operation status state machine.

use serde::{Deserialize, Serialize};

/// The status of an operation in its lifecycle.
///
/// Status transitions:
/// ```text
/// Draft ──► Ready ──► Done
///                     Cancelled
/// ```
///
/// Done and Cancelled are terminal. Nothing currently transitions an
/// operation to Cancelled; the status exists for seeded and historical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    /// Operation is being drafted and has not been released for validation.
    #[default]
    Draft,

    /// Operation is ready to validate.
    Ready,

    /// Effects have been committed to the product registry (terminal state).
    Done,

    /// Operation was cancelled (terminal state).
    Cancelled,
}

impl OperationStatus {
    /// Returns true if this is a terminal status (no further transitions).
    pub fn is_terminal(&self) -> bool {
        matches!(self, OperationStatus::Done | OperationStatus::Cancelled)
    }

    /// Returns true while the operation still represents open work.
    pub fn is_pending(&self) -> bool {
        !self.is_terminal()
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationStatus::Draft => "DRAFT",
            OperationStatus::Ready => "READY",
            OperationStatus::Done => "DONE",
            OperationStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
