//! Queue Error Types

use crate::ledger::LedgerError;

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("Unknown specialty: {name}")]
    UnknownSpecialty { name: String },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

impl crate::core::error_handling::ContextualError for QueueError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, QueueError::UnknownSpecialty { .. })
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            QueueError::UnknownSpecialty { .. } => {
                Some("The requested specialty does not exist; pick one from the specialty list")
            }
            QueueError::Ledger(_) => None,
        }
    }
}
