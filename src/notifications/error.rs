//! Error types for the notification hub

use std::fmt;

#[derive(Debug, Clone)]
pub enum NotificationError {
    BroadcastFailed {
        specialty: String,
        failed_subscribers: Vec<String>,
    },
}

impl fmt::Display for NotificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationError::BroadcastFailed {
                specialty,
                failed_subscribers,
            } => {
                write!(
                    f,
                    "Failed to deliver {} update to {} subscribers: {:?}",
                    specialty,
                    failed_subscribers.len(),
                    failed_subscribers
                )
            }
        }
    }
}

impl std::error::Error for NotificationError {}

impl crate::core::error_handling::ContextualError for NotificationError {
    fn is_user_actionable(&self) -> bool {
        false // Delivery failures are transport-level, never the caller's fault
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}
