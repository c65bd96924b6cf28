//! Per-specialty FIFO queues with a reverse membership index
//!
//! Each specialty owns one ordered queue of identities behind its own
//! lock, so mutations to different specialties proceed concurrently. The
//! membership index maps identity to the specialty it currently waits in,
//! turning the single-membership check into an O(1) lookup instead of a
//! scan over every queue.

use crate::ledger::{Identity, TicketLedger};
use crate::queue::specialty::Specialty;
use crate::queue::types::{QueueSnapshot, SnapshotEntry};
use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;
use strum::IntoEnumIterator;

/// Outcome of an append attempt, computed atomically
#[derive(Debug, Clone, PartialEq)]
pub enum AppendOutcome {
    /// The identity joined the tail; the snapshot reflects the new state
    Appended(QueueSnapshot),
    /// The identity already waits somewhere; nothing changed
    AlreadyWaiting {
        specialty: Specialty,
        position: usize,
        total: usize,
    },
}

/// FIFO queue state for every specialty
///
/// # Lock order
///
/// The membership index is always acquired before any specialty queue,
/// and queue locks before the ledger. Mutations hold the index for their
/// full duration so the index and the queues never disagree.
#[derive(Debug)]
pub struct QueueStore {
    queues: HashMap<Specialty, RwLock<VecDeque<Identity>>>,
    membership: RwLock<HashMap<Identity, Specialty>>,
}

impl QueueStore {
    pub fn new() -> Self {
        let queues = Specialty::iter()
            .map(|specialty| (specialty, RwLock::new(VecDeque::new())))
            .collect();
        Self {
            queues,
            membership: RwLock::new(HashMap::new()),
        }
    }

    fn queue(&self, specialty: Specialty) -> &RwLock<VecDeque<Identity>> {
        // Populated for every variant at construction
        self.queues
            .get(&specialty)
            .expect("queue exists for every specialty")
    }

    /// Specialty the identity is currently waiting in, if any
    pub fn member_of(&self, identity: &Identity) -> Option<Specialty> {
        self.membership.read().unwrap().get(identity).copied()
    }

    /// Append to the tail unless the identity already waits somewhere
    ///
    /// Returns `true` when the queue contents changed.
    pub fn append(&self, specialty: Specialty, identity: &Identity) -> bool {
        let mut membership = self.membership.write().unwrap();
        if membership.contains_key(identity) {
            return false;
        }

        membership.insert(identity.clone(), specialty);
        self.queue(specialty)
            .write()
            .unwrap()
            .push_back(identity.clone());
        true
    }

    /// Append and report the resulting state in one indivisible step
    ///
    /// On the idempotent path this reports the queue the identity is
    /// already in, which may differ from the requested specialty.
    pub fn append_or_report(
        &self,
        specialty: Specialty,
        identity: &Identity,
        ledger: &TicketLedger,
    ) -> AppendOutcome {
        let mut membership = self.membership.write().unwrap();

        if let Some(&waiting_in) = membership.get(identity) {
            let queue = self.queue(waiting_in).read().unwrap();
            let position = queue
                .iter()
                .position(|queued| queued == identity)
                .map(|idx| idx + 1)
                .expect("membership index and queue agree");
            return AppendOutcome::AlreadyWaiting {
                specialty: waiting_in,
                position,
                total: queue.len(),
            };
        }

        membership.insert(identity.clone(), specialty);
        let mut queue = self.queue(specialty).write().unwrap();
        queue.push_back(identity.clone());
        AppendOutcome::Appended(Self::snapshot_locked(specialty, &queue, ledger))
    }

    /// Remove and return the head of the specialty's queue
    ///
    /// An empty queue is a normal `None`, not a fault.
    pub fn pop_front(&self, specialty: Specialty) -> Option<Identity> {
        let mut membership = self.membership.write().unwrap();
        let mut queue = self.queue(specialty).write().unwrap();
        let identity = queue.pop_front()?;
        membership.remove(&identity);
        Some(identity)
    }

    /// Pop the head and snapshot the remainder in one indivisible step
    pub fn pop_front_with_snapshot(
        &self,
        specialty: Specialty,
        ledger: &TicketLedger,
    ) -> Option<(Identity, QueueSnapshot)> {
        let mut membership = self.membership.write().unwrap();
        let mut queue = self.queue(specialty).write().unwrap();
        let identity = queue.pop_front()?;
        membership.remove(&identity);
        Some((identity, Self::snapshot_locked(specialty, &queue, ledger)))
    }

    /// 1-based rank from the head, or `None` when not in that queue
    pub fn position_of(&self, specialty: Specialty, identity: &Identity) -> Option<usize> {
        self.queue(specialty)
            .read()
            .unwrap()
            .iter()
            .position(|queued| queued == identity)
            .map(|idx| idx + 1)
    }

    pub fn count(&self, specialty: Specialty) -> usize {
        self.queue(specialty).read().unwrap().len()
    }

    /// Point-in-time ordered view of one specialty's queue
    pub fn snapshot(&self, specialty: Specialty, ledger: &TicketLedger) -> QueueSnapshot {
        let queue = self.queue(specialty).read().unwrap();
        Self::snapshot_locked(specialty, &queue, ledger)
    }

    /// Total waiting population across all queues
    pub fn total_waiting(&self) -> usize {
        self.membership.read().unwrap().len()
    }

    fn snapshot_locked(
        specialty: Specialty,
        queue: &VecDeque<Identity>,
        ledger: &TicketLedger,
    ) -> QueueSnapshot {
        let entries = queue
            .iter()
            .enumerate()
            .map(|(idx, identity)| SnapshotEntry {
                position: idx + 1,
                identity: identity.clone(),
                ticket: ledger.lookup(identity),
            })
            .collect();
        QueueSnapshot { specialty, entries }
    }
}

impl Default for QueueStore {
    fn default() -> Self {
        Self::new()
    }
}
