//! Queue Coordination Component
//!
//! Per-specialty FIFO intake queues with an identity-to-ticket binding and
//! a notification fan-out after every content-changing mutation.
//!
//! # Overview
//!
//! The [`QueueCoordinator`] is the public operation surface. It owns the
//! queue store, the ticket ledger and the notification hub, and enforces
//! the intake invariants:
//!
//! - **Strict FIFO**: position is arrival order; release always takes the head
//! - **Single membership**: an identity waits in at most one queue system-wide
//! - **Exactly-once enqueue**: repeat submissions are no-ops, not rejections
//! - **One ticket per identity**: issued once, never changed
//!
//! # Architecture
//!
//! ```text
//! submit(identity, symptoms)          accept(specialty)
//!          │                                 │
//!          ▼                                 ▼
//! ┌─────────────────────────────────────────────────┐
//! │                QueueCoordinator                 │
//! │  ┌─────────────┐  ┌──────────────────────────┐  │
//! │  │ TicketLedger│  │        QueueStore        │  │
//! │  │ id → ticket │  │ Cardiology:  [a, b, ...] │  │
//! │  └─────────────┘  │ Neurology:   [c, ...]    │  │
//! │                   │ General Phys:[d, e, ...] │  │
//! │                   └──────────────────────────┘  │
//! └──────────────────────────┬──────────────────────┘
//!                            │ snapshot per mutation
//!                            ▼
//!                   ┌─────────────────┐
//!                   │ NotificationHub │──▶ one update per subscriber
//!                   └─────────────────┘
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use intakeq::ledger::Identity;
//! use intakeq::queue::{QueueCoordinator, Specialty};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let coordinator = QueueCoordinator::new();
//!
//! let admission = coordinator.submit(&Identity::new("sess-A"), &["Fever"])?;
//! assert_eq!(admission.specialty, Specialty::GeneralPhysician);
//! assert_eq!(admission.position, 1);
//!
//! // Staff releases the head of the queue
//! if let Some(released) = coordinator.accept(Specialty::GeneralPhysician) {
//!     println!("Now serving {}", released.identity);
//! }
//! # Ok(())
//! # }
//! ```

mod coordinator;
mod error;
mod specialty;
mod store;
mod triage;
mod types;

pub mod api;

pub use coordinator::QueueCoordinator;
pub use error::{QueueError, QueueResult};
pub use specialty::Specialty;
pub(crate) use store::{AppendOutcome, QueueStore};
pub use triage::{assign_specialty, DEFAULT_SPECIALTY, SYMPTOMS};
pub use types::{
    Admission, PositionReply, QueueSnapshot, Released, SnapshotEntry, POSITION_NOT_IN_QUEUE,
};
