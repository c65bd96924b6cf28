//! QueueCoordinator - the public intake operation surface
//!
//! The coordinator owns the queue store, the ticket ledger and the
//! notification hub, and is the only path through which queue state
//! changes. Every content-changing mutation snapshots the affected queue
//! while still holding its lock and fans the snapshot out to subscribers;
//! no-op submissions and accepts on empty queues notify nobody.

use crate::ledger::{Identity, TicketLedger};
use crate::notifications::{NotificationHub, QueueUpdate};
use crate::queue::error::QueueResult;
use crate::queue::specialty::Specialty;
use crate::queue::store::{AppendOutcome, QueueStore};
use crate::queue::triage;
use crate::queue::types::{Admission, PositionReply, QueueSnapshot, Released};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// Central coordination point for patient intake
///
/// Per-identity lifecycle: unregistered, then waiting in exactly one
/// specialty's queue, then served. Serving is terminal for queue
/// membership; a later submission by the same identity is a fresh join
/// under the already-issued ticket.
///
/// # Thread Safety
///
/// The coordinator is fully thread-safe and intended to be shared across
/// handler tasks as `Arc<QueueCoordinator>`. Operations complete as
/// indivisible units; mutations to different specialties do not contend.
///
/// # Example
///
/// ```rust,no_run
/// use intakeq::ledger::Identity;
/// use intakeq::queue::QueueCoordinator;
/// use std::sync::Arc;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let coordinator = Arc::new(QueueCoordinator::new());
///
/// let admission = coordinator.submit(&Identity::new("sess-A"), &["Headache"])?;
/// println!("Waiting in {} as {}", admission.specialty, admission.ticket);
/// # Ok(())
/// # }
/// ```
pub struct QueueCoordinator {
    store: Arc<QueueStore>,
    ledger: Arc<TicketLedger>,
    hub: NotificationHub,
}

impl QueueCoordinator {
    pub fn new() -> Self {
        let store = Arc::new(QueueStore::new());
        let ledger = Arc::new(TicketLedger::new());
        let hub = NotificationHub::new(Arc::clone(&store), Arc::clone(&ledger));
        Self { store, ledger, hub }
    }

    /// Classify the symptoms and join the matching specialty's queue
    ///
    /// Idempotent: an identity already waiting anywhere gets its existing
    /// admission back unchanged, whatever today's symptoms classify to,
    /// and no broadcast is sent. A fresh join broadcasts exactly once.
    pub fn submit<S: AsRef<str>>(
        &self,
        identity: &Identity,
        symptoms: &[S],
    ) -> QueueResult<Admission> {
        let specialty = triage::assign_specialty(symptoms);
        let ticket = self.ledger.issue_or_get(identity)?;

        match self.store.append_or_report(specialty, identity, &self.ledger) {
            AppendOutcome::Appended(snapshot) => {
                let total = snapshot.total();
                log::info!(
                    "Identity {identity} joined {specialty} queue as {ticket} at position {total}"
                );
                self.broadcast(specialty, &snapshot);
                Ok(Admission {
                    specialty,
                    ticket,
                    position: total, // appended at the tail
                    total,
                    newly_queued: true,
                })
            }
            AppendOutcome::AlreadyWaiting {
                specialty: waiting_in,
                position,
                total,
            } => {
                log::debug!(
                    "Identity {identity} already waiting in {waiting_in}; submission is a no-op"
                );
                Ok(Admission {
                    specialty: waiting_in,
                    ticket,
                    position,
                    total,
                    newly_queued: false,
                })
            }
        }
    }

    /// Release the head of the specialty's queue to staff
    ///
    /// An empty queue returns `None` with no state change and no
    /// broadcast; that models "nothing to accept", not an error.
    pub fn accept(&self, specialty: Specialty) -> Option<Released> {
        let (identity, snapshot) = self.store.pop_front_with_snapshot(specialty, &self.ledger)?;
        let ticket = self.ledger.lookup(&identity);

        log::info!(
            "Released {identity} from {specialty} queue; {} still waiting",
            snapshot.total()
        );
        self.broadcast(specialty, &snapshot);

        Some(Released { identity, ticket })
    }

    /// Current 1-based position of the identity in the specialty's queue
    pub fn position(&self, specialty: Specialty, identity: &Identity) -> PositionReply {
        self.hub.query_position(specialty, identity)
    }

    pub fn count(&self, specialty: Specialty) -> usize {
        self.store.count(specialty)
    }

    /// Ordered listing of one specialty's queue (the staff dashboard view)
    pub fn snapshot(&self, specialty: Specialty) -> QueueSnapshot {
        self.store.snapshot(specialty, &self.ledger)
    }

    /// Specialty the identity currently waits in, if any
    pub fn member_of(&self, identity: &Identity) -> Option<Specialty> {
        self.store.member_of(identity)
    }

    /// Ticket issued to the identity, if one exists
    pub fn ticket_of(&self, identity: &Identity) -> Option<crate::ledger::Ticket> {
        self.ledger.lookup(identity)
    }

    /// Register an observer for one specialty's queue updates
    pub fn subscribe(
        &self,
        specialty: Specialty,
        identity: &Identity,
    ) -> UnboundedReceiver<QueueUpdate> {
        self.hub.subscribe(specialty, identity)
    }

    /// Drop an observer's registration; no-op if absent
    pub fn unsubscribe(&self, specialty: Specialty, identity: &Identity) {
        self.hub.unsubscribe(specialty, identity)
    }

    /// Pull-based position resync, independent of broadcast delivery
    pub fn query_position(&self, specialty: Specialty, identity: &Identity) -> PositionReply {
        self.hub.query_position(specialty, identity)
    }

    pub fn hub(&self) -> &NotificationHub {
        &self.hub
    }

    /// Fire-and-forget fan-out: delivery failures prune the dead
    /// subscriber inside the hub and are only logged here.
    fn broadcast(&self, specialty: Specialty, snapshot: &QueueSnapshot) {
        if let Err(err) = self.hub.broadcast(specialty, snapshot) {
            log::debug!("Broadcast for {specialty} incomplete: {err}");
        }
    }
}

impl Default for QueueCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
