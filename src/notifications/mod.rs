//! Notification Hub Component
//!
//! Per-specialty publish/subscribe fan-out keeping every connected
//! observer's view of a queue consistent after each mutation. Each
//! subscriber holds the receiving half of an unbounded channel; the
//! sending half is the transport handle the hub delivers to, best-effort
//! and without awaiting confirmation.

mod error;
mod hub;
mod message;

pub mod api;

pub use error::NotificationError;
pub use hub::NotificationHub;
pub use message::QueueUpdate;
