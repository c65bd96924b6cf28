//! Identity Ledger Component
//!
//! Binds each caller's opaque session identity to a display-facing queue
//! ticket. A ticket is issued at most once per identity, drawn randomly
//! from the configured number range with collision retry, and never
//! changes once issued. The ledger outlives queue membership so a served
//! patient can still be shown their ticket afterwards.
//!
//! # Example
//!
//! ```rust
//! use intakeq::ledger::{Identity, TicketLedger};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ledger = TicketLedger::new();
//! let identity = Identity::new("sess-A");
//!
//! let ticket = ledger.issue_or_get(&identity)?;
//! assert_eq!(ledger.issue_or_get(&identity)?, ticket);
//! assert_eq!(ledger.lookup(&identity), Some(ticket));
//! # Ok(())
//! # }
//! ```

mod error;
mod registry;
mod types;

pub mod api;

pub use error::{LedgerError, LedgerResult};
pub use registry::TicketLedger;
pub use types::{Identity, Ticket};
