//! NotificationHub implementation

use crate::ledger::{Identity, TicketLedger};
use crate::notifications::error::NotificationError;
use crate::notifications::message::QueueUpdate;
use crate::queue::{PositionReply, QueueSnapshot, QueueStore, Specialty, POSITION_NOT_IN_QUEUE};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use strum::IntoEnumIterator;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Per-specialty subscriber registry with push fan-out
///
/// A subscription pairs an identity with the sending half of an unbounded
/// channel; [`NotificationHub::subscribe`] returns the receiving half to
/// the transport adapter. Delivery is non-blocking and best-effort: a
/// closed channel means the transport went away, and the registration is
/// pruned on the next broadcast that touches it.
///
/// Subscription changes may race with broadcasts; the registry lock is
/// held only long enough to iterate or mutate one specialty's map.
pub struct NotificationHub {
    store: Arc<QueueStore>,
    ledger: Arc<TicketLedger>,
    subscribers: HashMap<Specialty, RwLock<HashMap<Identity, UnboundedSender<QueueUpdate>>>>,
}

impl NotificationHub {
    pub fn new(store: Arc<QueueStore>, ledger: Arc<TicketLedger>) -> Self {
        let subscribers = Specialty::iter()
            .map(|specialty| (specialty, RwLock::new(HashMap::new())))
            .collect();
        Self {
            store,
            ledger,
            subscribers,
        }
    }

    fn registry(
        &self,
        specialty: Specialty,
    ) -> &RwLock<HashMap<Identity, UnboundedSender<QueueUpdate>>> {
        // Populated for every variant at construction
        self.subscribers
            .get(&specialty)
            .expect("registry exists for every specialty")
    }

    /// Register a persistent interest in one specialty's queue updates
    ///
    /// Re-subscribing the same identity replaces the previous
    /// registration, so a duplicate subscription never double-delivers.
    pub fn subscribe(
        &self,
        specialty: Specialty,
        identity: &Identity,
    ) -> UnboundedReceiver<QueueUpdate> {
        let (sender, receiver) = unbounded_channel();

        let mut registry = self.registry(specialty).write().unwrap();
        if registry.insert(identity.clone(), sender).is_some() {
            log::warn!("Subscriber {identity} replaced existing {specialty} subscription");
        }

        receiver
    }

    /// Remove an observer's interest; safe to call when not subscribed
    pub fn unsubscribe(&self, specialty: Specialty, identity: &Identity) {
        let mut registry = self.registry(specialty).write().unwrap();
        if registry.remove(identity).is_none() {
            log::trace!("Unsubscribe for {identity} ignored: not subscribed to {specialty}");
        }
    }

    pub fn subscriber_count(&self, specialty: Specialty) -> usize {
        self.registry(specialty).read().unwrap().len()
    }

    pub fn has_subscriber(&self, specialty: Specialty, identity: &Identity) -> bool {
        self.registry(specialty)
            .read()
            .unwrap()
            .contains_key(identity)
    }

    /// Push one update per current subscriber of the specialty
    ///
    /// Each update carries the receiving subscriber's own position in the
    /// snapshot. Returns the delivery count; subscribers whose channel has
    /// closed are pruned and reported, everyone else still receives theirs.
    pub fn broadcast(
        &self,
        specialty: Specialty,
        snapshot: &QueueSnapshot,
    ) -> Result<usize, NotificationError> {
        let mut failed = Vec::new();
        let mut delivered = 0;

        {
            let registry = self.registry(specialty).read().unwrap();
            for (identity, sender) in registry.iter() {
                let ticket = self.ledger.lookup(identity);
                let update = QueueUpdate::for_subscriber(snapshot, identity, ticket);
                if sender.send(update).is_err() {
                    failed.push(identity.clone());
                } else {
                    delivered += 1;
                }
            }
        }

        if failed.is_empty() {
            log::trace!("Broadcast {specialty} snapshot to {delivered} subscribers");
            return Ok(delivered);
        }

        // A closed channel means the transport dropped its receiver
        self.prune_closed(specialty, &failed);

        Err(NotificationError::BroadcastFailed {
            specialty: specialty.to_string(),
            failed_subscribers: failed.iter().map(|identity| identity.to_string()).collect(),
        })
    }

    /// Drop failed registrations whose stored sender is still closed
    ///
    /// The identity may have re-subscribed between the delivery pass and
    /// this one; in that case the registry holds a fresh live sender and
    /// the registration must survive.
    fn prune_closed(&self, specialty: Specialty, failed: &[Identity]) {
        let mut registry = self.registry(specialty).write().unwrap();
        for identity in failed {
            if registry
                .get(identity)
                .is_some_and(|sender| sender.is_closed())
            {
                registry.remove(identity);
            }
        }
    }

    /// On-demand position answer for a single observer
    ///
    /// Pull-based fallback for reconnect/resync, so an observer's
    /// correctness never depends on having seen the last broadcast.
    pub fn query_position(&self, specialty: Specialty, identity: &Identity) -> PositionReply {
        let snapshot = self.store.snapshot(specialty, &self.ledger);
        PositionReply {
            specialty,
            position: snapshot
                .position_of(identity)
                .map(|rank| rank as i64)
                .unwrap_or(POSITION_NOT_IN_QUEUE),
            total: snapshot.total(),
            ticket: self.ledger.lookup(identity),
        }
    }
}
