//! Ledger Error Types

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Ticket space exhausted after {attempts} generation attempts")]
    TicketSpaceExhausted { attempts: usize },
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

impl crate::core::error_handling::ContextualError for LedgerError {
    fn is_user_actionable(&self) -> bool {
        false // Ticket exhaustion is a capacity problem, not a caller mistake
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}
