//! Domain model for tracked tasks.
//!
//! # Responsibility
//! - Define the task value object shared by the store, sinks, and
//!   persistence.
//!
//! # Invariants
//! - Task identity is structural; there is no external ID.
//! - The due date, once constructed, never changes; only the done flag
//!   mutates in place.

pub mod task;
