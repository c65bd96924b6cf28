//! Shared types for queue state reporting

use crate::ledger::{Identity, Ticket};
use crate::queue::specialty::Specialty;
use serde::Serialize;

/// Sentinel position for identities not currently in the queue
pub const POSITION_NOT_IN_QUEUE: i64 = -1;

/// One waiting patient inside a snapshot, 1-based from the head
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotEntry {
    pub position: usize,
    pub identity: Identity,
    pub ticket: Option<Ticket>,
}

/// Point-in-time ordered state of one specialty's queue
///
/// Snapshots are read under the same per-specialty exclusion used for
/// mutation, so they never show a half-applied change. They feed both the
/// broadcast fan-out and the staff dashboard listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueSnapshot {
    pub specialty: Specialty,
    pub entries: Vec<SnapshotEntry>,
}

impl QueueSnapshot {
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// 1-based rank of the identity inside this snapshot, if present
    pub fn position_of(&self, identity: &Identity) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| &entry.identity == identity)
            .map(|entry| entry.position)
    }
}

/// Result of a submission: where the patient waits and under which ticket
///
/// `newly_queued` distinguishes a fresh join from the idempotent repeat
/// path; only fresh joins trigger a broadcast.
#[derive(Debug, Clone, PartialEq)]
pub struct Admission {
    pub specialty: Specialty,
    pub ticket: Ticket,
    pub position: usize,
    pub total: usize,
    pub newly_queued: bool,
}

/// Head of a queue released to staff
///
/// The ticket stays in the ledger after release so a post-service
/// confirmation can still display it.
#[derive(Debug, Clone, PartialEq)]
pub struct Released {
    pub identity: Identity,
    pub ticket: Option<Ticket>,
}

/// On-demand position answer for a single observer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionReply {
    pub specialty: Specialty,
    /// 1-based position, or [`POSITION_NOT_IN_QUEUE`] when not waiting
    pub position: i64,
    pub total: usize,
    pub ticket: Option<Ticket>,
}
