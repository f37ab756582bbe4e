//! Free-text parsing helpers for date clauses and raw commands.
//!
//! # Responsibility
//! - Parse and normalize the date grammar used by dated tasks.
//! - Split raw command text into descriptor fragments at a clause marker.
//!
//! # Invariants
//! - Parsers are pure; no logging, no I/O, no shared mutable state.
//! - Malformed input is reported through typed errors, never panics.

pub mod command;
pub mod date;
