//! Generic error handling utilities
//!
//! Provides unified error handling that works across the per-module error
//! types while keeping domain-specific logging patterns.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// The boundary layer uses this to decide whether an error should surface
/// as a specific message to the caller or as generic context with debug
/// detail reserved for operators.
///
/// # Implementation Consistency
/// When `is_user_actionable()` returns `true`, `user_message()` should
/// return `Some(message)` with a clear, actionable message; when it
/// returns `false`, `user_message()` should return `None`.
pub trait ContextualError: std::error::Error {
    /// True if this error carries a specific, user-actionable message
    ///
    /// Examples of user-actionable errors:
    /// - A request naming a specialty outside the fixed set
    ///
    /// Examples of system errors:
    /// - Ticket-space exhaustion
    /// - Broadcast delivery failures
    fn is_user_actionable(&self) -> bool;

    /// The specific user message when this is a user-actionable error
    fn user_message(&self) -> Option<&str>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// User-actionable errors keep their specific message; system errors show
/// the operation context, with full detail pushed down to debug level.
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    if error.is_user_actionable() {
        if let Some(user_msg) = error.user_message() {
            log::error!("FATAL: {}", user_msg);
        } else {
            log::error!("FATAL: {}", operation_context);
        }
    } else {
        log::error!("FATAL: {}", operation_context);
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
