//! Ambient utilities shared across the crate

pub mod error_handling;
pub mod logging;
