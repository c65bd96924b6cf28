//! Public API for the identity ledger
//!
//! External modules should import from here rather than directly from
//! internal modules.

pub use crate::ledger::error::{LedgerError, LedgerResult};
pub use crate::ledger::registry::TicketLedger;
pub use crate::ledger::types::{Identity, Ticket};
