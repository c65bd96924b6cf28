//! Public API for the queue coordination system
//!
//! This module provides the complete public API for patient intake queues.
//! External modules should import from here rather than directly from
//! internal modules.

// Coordination surface
pub use crate::queue::coordinator::QueueCoordinator;

// Specialty set and symptom classification
pub use crate::queue::specialty::Specialty;
pub use crate::queue::triage::{assign_specialty, DEFAULT_SPECIALTY, SYMPTOMS};

// Reporting types
pub use crate::queue::types::{
    Admission, PositionReply, QueueSnapshot, Released, SnapshotEntry, POSITION_NOT_IN_QUEUE,
};

// Error handling
pub use crate::queue::error::{QueueError, QueueResult};
