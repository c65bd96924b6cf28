//! Ticket ledger mapping session identities to issued tickets

use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::types::{Identity, Ticket};
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;
use std::sync::RwLock;

/// Bound on random generation attempts before reporting exhaustion
const MAX_GENERATION_ATTEMPTS: usize = 10_000;

/// Default ticket number range (9000 possible values)
const DEFAULT_TICKET_RANGE: RangeInclusive<u16> = 1000..=9999;

#[derive(Debug, Default)]
struct LedgerState {
    issued: HashMap<Identity, Ticket>,
    in_use: HashSet<Ticket>,
}

/// Ledger binding each identity to exactly one issued ticket
///
/// Tickets are generated randomly within the configured range and
/// regenerated on collision against all currently issued tickets.
/// Generation is bounded; a ledger whose range has filled up reports
/// `TicketSpaceExhausted` instead of spinning.
///
/// # Thread Safety
///
/// All state sits behind a single internal lock, so a `TicketLedger` can
/// be shared across threads via `Arc` without external synchronisation.
#[derive(Debug)]
pub struct TicketLedger {
    state: RwLock<LedgerState>,
    range: RangeInclusive<u16>,
}

impl TicketLedger {
    pub fn new() -> Self {
        Self::with_range(DEFAULT_TICKET_RANGE)
    }

    /// Create a ledger drawing ticket numbers from a custom range
    ///
    /// Narrow ranges make ticket-space exhaustion reachable in tests.
    pub fn with_range(range: RangeInclusive<u16>) -> Self {
        Self {
            state: RwLock::new(LedgerState::default()),
            range,
        }
    }

    /// Return the identity's ticket, issuing a new one on first call
    ///
    /// Idempotent per identity: every later call returns the same ticket.
    pub fn issue_or_get(&self, identity: &Identity) -> LedgerResult<Ticket> {
        let mut state = self.state.write().unwrap();

        if let Some(ticket) = state.issued.get(identity) {
            return Ok(*ticket);
        }

        let mut rng = rand::thread_rng();
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = Ticket::new(rng.gen_range(self.range.clone()));
            if state.in_use.contains(&candidate) {
                continue;
            }

            state.in_use.insert(candidate);
            state.issued.insert(identity.clone(), candidate);
            log::debug!("Issued ticket {} to identity {}", candidate, identity);
            return Ok(candidate);
        }

        log::error!(
            "Ticket generation gave up after {} attempts ({} tickets issued)",
            MAX_GENERATION_ATTEMPTS,
            state.issued.len()
        );
        Err(LedgerError::TicketSpaceExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    /// Look up an already issued ticket; never issues
    pub fn lookup(&self, identity: &Identity) -> Option<Ticket> {
        self.state.read().unwrap().issued.get(identity).copied()
    }

    /// Number of tickets currently issued
    pub fn issued_count(&self) -> usize {
        self.state.read().unwrap().issued.len()
    }

    /// Drop every issued ticket (process-wide reset)
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap();
        state.issued.clear();
        state.in_use.clear();
    }
}

impl Default for TicketLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_is_idempotent_per_identity() {
        let ledger = TicketLedger::new();
        let identity = Identity::new("sess-A");

        let first = ledger.issue_or_get(&identity).unwrap();
        let second = ledger.issue_or_get(&identity).unwrap();

        assert_eq!(first, second);
        assert_eq!(ledger.issued_count(), 1);
    }

    #[test]
    fn test_tickets_are_unique_across_identities() {
        let ledger = TicketLedger::new();

        let mut seen = HashSet::new();
        for n in 0..100 {
            let ticket = ledger
                .issue_or_get(&Identity::new(format!("sess-{n}")))
                .unwrap();
            assert!(seen.insert(ticket), "duplicate ticket {ticket}");
        }
    }

    #[test]
    fn test_issued_tickets_stay_in_range() {
        let ledger = TicketLedger::new();

        for n in 0..50 {
            let ticket = ledger
                .issue_or_get(&Identity::new(format!("sess-{n}")))
                .unwrap();
            assert!((1000..=9999).contains(&ticket.number()));
            assert_eq!(ticket.to_string().len(), 6); // "P-" + 4 digits
        }
    }

    #[test]
    fn test_lookup_never_issues() {
        let ledger = TicketLedger::new();
        let identity = Identity::new("sess-A");

        assert_eq!(ledger.lookup(&identity), None);
        assert_eq!(ledger.issued_count(), 0);

        let ticket = ledger.issue_or_get(&identity).unwrap();
        assert_eq!(ledger.lookup(&identity), Some(ticket));
    }

    #[test]
    fn test_exhausted_range_reports_error() {
        let ledger = TicketLedger::with_range(1000..=1001);

        ledger.issue_or_get(&Identity::new("sess-A")).unwrap();
        ledger.issue_or_get(&Identity::new("sess-B")).unwrap();

        match ledger.issue_or_get(&Identity::new("sess-C")) {
            Err(LedgerError::TicketSpaceExhausted { attempts }) => {
                assert_eq!(attempts, MAX_GENERATION_ATTEMPTS);
            }
            other => panic!("Expected TicketSpaceExhausted, got {other:?}"),
        }
    }

    #[test]
    fn test_clear_resets_ledger() {
        let ledger = TicketLedger::with_range(1000..=1000);
        let identity = Identity::new("sess-A");

        ledger.issue_or_get(&identity).unwrap();
        ledger.clear();

        assert_eq!(ledger.lookup(&identity), None);
        assert_eq!(ledger.issued_count(), 0);
        // The single ticket number is available again after the reset
        assert!(ledger.issue_or_get(&Identity::new("sess-B")).is_ok());
    }
}
