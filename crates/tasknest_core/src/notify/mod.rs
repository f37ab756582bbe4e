//! Notification sink boundary.
//!
//! # Responsibility
//! - Define the outbound callbacks the store fires after mutations and
//!   listings.
//!
//! # Invariants
//! - Sinks are observation-only; they must not call back into the store.
//! - The store emits every notification synchronously on the caller's
//!   thread, in a fixed order per operation.

use crate::model::task::Task;

/// Receives human-readable descriptions of store activity.
///
/// The console implementation lives in the CLI crate; tests use recording
/// sinks; [`SilentSink`] serves headless embedding.
pub trait NotificationSink {
    /// A task entered the store; `count` is the new total.
    fn task_added(&mut self, task: &Task, count: usize);
    /// A task left the store; `count` is the new total.
    fn task_deleted(&mut self, task: &Task, count: usize);
    /// A task was just marked done.
    fn task_done(&mut self, task: &Task);
    /// A full listing is about to be emitted.
    fn listing_header(&mut self);
    /// One listing row; `position` is 1-based display order.
    fn listing_line(&mut self, position: usize, rendered: &str);
}

/// Sink that drops every notification. Useful when embedding the store
/// without a user-facing surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl NotificationSink for SilentSink {
    fn task_added(&mut self, _task: &Task, _count: usize) {}
    fn task_deleted(&mut self, _task: &Task, _count: usize) {}
    fn task_done(&mut self, _task: &Task) {}
    fn listing_header(&mut self) {}
    fn listing_line(&mut self, _position: usize, _rendered: &str) {}
}
