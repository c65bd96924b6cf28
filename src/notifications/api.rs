//! Public API for the notification hub
//!
//! External modules should import from here rather than directly from
//! internal modules.

pub use crate::notifications::error::NotificationError;
pub use crate::notifications::hub::NotificationHub;
pub use crate::notifications::message::QueueUpdate;
