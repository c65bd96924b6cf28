//! Identity and ticket value types

use serde::{Serialize, Serializer};
use std::fmt;

/// Opaque session identity supplied by the boundary layer
///
/// The core never inspects the token beyond equality and hashing. It is
/// created by the external session layer; the ledger and queues only
/// reference it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for Identity {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Display-facing queue ticket, rendered as `P-<4 digits>`
///
/// Tickets carry their raw number internally and serialize as the display
/// string so transports see the same text patients do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u16);

impl Ticket {
    pub(crate) fn new(number: u16) -> Self {
        Self(number)
    }

    pub fn number(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{:04}", self.0)
    }
}

impl Serialize for Ticket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_display_format() {
        assert_eq!(Ticket::new(1000).to_string(), "P-1000");
        assert_eq!(Ticket::new(9999).to_string(), "P-9999");
    }

    #[test]
    fn test_ticket_serializes_as_display_string() {
        let json = serde_json::to_string(&Ticket::new(4217)).unwrap();
        assert_eq!(json, "\"P-4217\"");
    }

    #[test]
    fn test_identity_equality_is_token_equality() {
        assert_eq!(Identity::new("sess-A"), Identity::from("sess-A"));
        assert_ne!(Identity::new("sess-A"), Identity::new("sess-B"));
    }

    #[test]
    fn test_identity_serializes_transparently() {
        let json = serde_json::to_string(&Identity::new("sess-A")).unwrap();
        assert_eq!(json, "\"sess-A\"");
    }
}
