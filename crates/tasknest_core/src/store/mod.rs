//! In-memory sorted task store.
//!
//! # Responsibility
//! - Keep tasks in the single display order at all times.
//! - Expose the add/delete/mark-done/list/get operations behind typed
//!   errors.
//!
//! # Invariants
//! - Ordering: todos first, then dated tasks by ascending timestamp;
//!   equal-comparing tasks keep insertion order and are never collapsed.
//! - Positions are derived from the current order, not stable handles.

pub mod task_store;
