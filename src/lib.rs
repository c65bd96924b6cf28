pub mod core;
pub mod ledger;
pub mod notifications;
pub mod queue;
