//! Persistence contracts for the external task store.
//!
//! # Responsibility
//! - Define the entity-list save/load contract used to seed the in-memory
//!   store.
//! - Keep SQL details out of the store and CLI layers.
//!
//! # Invariants
//! - The persisted list is replaced wholesale; there are no per-task
//!   updates because tasks carry no stable external identity.

pub mod task_repo;
