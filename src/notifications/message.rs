//! Outbound update messages delivered to subscribers

use crate::ledger::{Identity, Ticket};
use crate::queue::{QueueSnapshot, Specialty, POSITION_NOT_IN_QUEUE};
use serde::Serialize;

/// Position update pushed to one subscriber after a queue mutation
///
/// `position` is the receiving subscriber's own 1-based rank in the
/// queue, or -1 when the subscriber is not currently waiting (staff
/// dashboards, already-served patients). Each subscriber of a specialty
/// gets its own update, never another session's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueUpdate {
    pub specialty: Specialty,
    pub position: i64,
    pub total: usize,
    pub ticket: Option<Ticket>,
    pub identity: Identity,
}

impl QueueUpdate {
    /// Build the update one subscriber should receive for a snapshot
    pub fn for_subscriber(
        snapshot: &QueueSnapshot,
        identity: &Identity,
        ticket: Option<Ticket>,
    ) -> Self {
        let position = snapshot
            .position_of(identity)
            .map(|rank| rank as i64)
            .unwrap_or(POSITION_NOT_IN_QUEUE);

        Self {
            specialty: snapshot.specialty,
            position,
            total: snapshot.total(),
            ticket,
            identity: identity.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::SnapshotEntry;

    fn snapshot() -> QueueSnapshot {
        QueueSnapshot {
            specialty: Specialty::Cardiology,
            entries: vec![SnapshotEntry {
                position: 1,
                identity: Identity::new("sess-A"),
                ticket: None,
            }],
        }
    }

    #[test]
    fn test_update_carries_subscribers_own_position() {
        let update = QueueUpdate::for_subscriber(&snapshot(), &Identity::new("sess-A"), None);
        assert_eq!(update.position, 1);
        assert_eq!(update.total, 1);
    }

    #[test]
    fn test_update_for_non_member_uses_sentinel() {
        let update = QueueUpdate::for_subscriber(&snapshot(), &Identity::new("staff-1"), None);
        assert_eq!(update.position, POSITION_NOT_IN_QUEUE);
        assert_eq!(update.total, 1);
    }

    #[test]
    fn test_update_wire_shape() {
        let update = QueueUpdate::for_subscriber(&snapshot(), &Identity::new("sess-A"), None);
        let json: serde_json::Value = serde_json::to_value(&update).unwrap();

        assert_eq!(json["specialty"], "Cardiology");
        assert_eq!(json["position"], 1);
        assert_eq!(json["total"], 1);
        assert_eq!(json["ticket"], serde_json::Value::Null);
        assert_eq!(json["identity"], "sess-A");
    }
}
