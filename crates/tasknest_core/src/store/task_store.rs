//! Task store operations and the ordering comparator.
//!
//! # Responsibility
//! - Maintain the sorted task collection and its count.
//! - Build task variants from clause splits, validating date text on the
//!   way in.
//! - Fire notification-sink callbacks after every mutation and listing.
//!
//! # Invariants
//! - Insertion is the only ordering step; entries never reorder afterward
//!   because no sort key mutates in place.
//! - A date that fails to parse during comparison compares equal rather
//!   than failing the operation; `add_task` validation keeps such dates
//!   out of the store, so the soft path only matters for seeded data.

use crate::model::task::{Task, TaskKind};
use crate::notify::NotificationSink;
use crate::parse::command::ClauseSplit;
use crate::parse::date::{format_date, parse_date, DateFormatError};
use log::{info, warn};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Clause marker introducing a deadline's date.
pub const DEADLINE_CLAUSE: &str = "/by";
/// Clause marker introducing an event's date.
pub const EVENT_CLAUSE: &str = "/at";

/// Description offset for `deadline …` input (`"deadline "` length).
pub const DEADLINE_DESCRIPTION_OFFSET: usize = 9;
/// Description offset for `event …` input (`"event "` length).
pub const EVENT_DESCRIPTION_OFFSET: usize = 6;

pub type StoreResult<T> = Result<T, StoreError>;

/// Typed failure surfaced by store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Malformed date text while adding a dated task.
    DateFormat(DateFormatError),
    /// Non-numeric or out-of-range 1-based index text on delete/mark-done.
    InvalidIndex(String),
    /// Direct 0-based access past the end of the collection.
    IndexOutOfRange { index: usize, count: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateFormat(err) => write!(f, "{err}"),
            Self::InvalidIndex(raw) => {
                write!(f, "`{raw}` is not a valid task number")
            }
            Self::IndexOutOfRange { index, count } => {
                write!(f, "task index {index} out of range for {count} tasks")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DateFormat(err) => Some(err),
            Self::InvalidIndex(_) => None,
            Self::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<DateFormatError> for StoreError {
    fn from(value: DateFormatError) -> Self {
        Self::DateFormat(value)
    }
}

/// Display order between two tasks.
///
/// Todos sort strictly before dated tasks and compare equal to each other.
/// Dated tasks compare by parsed timestamp ascending. A date that fails to
/// parse on either side makes the pair compare equal; ordering must never
/// raise, and callers cannot rely on the placement of unparsable entries.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    match (a.kind(), b.kind()) {
        (TaskKind::Todo, TaskKind::Todo) => Ordering::Equal,
        (TaskKind::Todo, _) => Ordering::Less,
        (_, TaskKind::Todo) => Ordering::Greater,
        _ => {
            let (Some(a_due), Some(b_due)) = (a.due(), b.due()) else {
                return Ordering::Equal;
            };
            match (parse_date(a_due), parse_date(b_due)) {
                (Ok(a_at), Ok(b_at)) => a_at.cmp(&b_at),
                _ => Ordering::Equal,
            }
        }
    }
}

/// One stored entry: the task plus its stable insertion sequence.
///
/// The sequence is the tie-break that keeps equal-comparing tasks distinct
/// and order-stable; it never reaches callers.
#[derive(Debug, Clone)]
struct TaskEntry {
    seq: u64,
    task: Task,
}

/// Sorted task collection with notification callbacks.
///
/// Single-threaded by design; the store owns the collection exclusively
/// and runs every operation to completion on the caller's thread.
pub struct TaskStore<S: NotificationSink> {
    entries: Vec<TaskEntry>,
    next_seq: u64,
    sink: S,
}

impl<S: NotificationSink> TaskStore<S> {
    /// Creates an empty store that notifies through `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
            sink,
        }
    }

    /// Builds the task variant for `kind` from a clause split and inserts
    /// it in sorted position.
    ///
    /// Todos take their description from the after-fragment; dated kinds
    /// take the before-fragment as description and normalize the
    /// after-fragment through the date parser.
    ///
    /// # Errors
    /// `DateFormat` when the date fragment of a deadline/event does not
    /// parse; the store is unchanged in that case.
    pub fn add_task(
        &mut self,
        kind: TaskKind,
        split: &ClauseSplit,
        done: bool,
        notify: bool,
    ) -> StoreResult<()> {
        let task = match kind {
            TaskKind::Todo => Task::todo(&split.after, done),
            TaskKind::Deadline => Task::deadline(&split.before, format_date(&split.after)?, done),
            TaskKind::Event => Task::event(&split.before, format_date(&split.after)?, done),
        };

        let position = self.insert_sorted(task);
        info!(
            "event=task_added module=store status=ok kind={} position={} count={}",
            kind.as_str(),
            position + 1,
            self.entries.len()
        );
        if notify {
            let entry = &self.entries[position];
            self.sink.task_added(&entry.task, self.entries.len());
        }
        Ok(())
    }

    /// [`TaskStore::add_task`] with defaults `done=false, notify=true`.
    pub fn add(&mut self, kind: TaskKind, split: &ClauseSplit) -> StoreResult<()> {
        self.add_task(kind, split, false, true)
    }

    /// Removes the task at a 1-based position given as raw text.
    ///
    /// # Errors
    /// `InvalidIndex` when the text is not an integer or the position is
    /// outside the collection; the full listing is emitted to the sink
    /// before the error surfaces.
    pub fn delete_task(&mut self, raw_index: &str) -> StoreResult<Task> {
        let index = match self.parse_position(raw_index) {
            Ok(index) => index,
            Err(err) => {
                warn!(
                    "event=task_deleted module=store status=error raw_index={}",
                    raw_index.trim()
                );
                self.list_tasks();
                return Err(err);
            }
        };

        let removed = self.entries.remove(index);
        info!(
            "event=task_deleted module=store status=ok position={} count={}",
            index + 1,
            self.entries.len()
        );
        self.sink.task_deleted(&removed.task, self.entries.len());
        Ok(removed.task)
    }

    /// Marks the task at a 1-based position (raw text) as done in place.
    ///
    /// The full listing is always emitted afterward, success or failure;
    /// the success path additionally emits the single-task done
    /// notification first.
    ///
    /// # Errors
    /// `InvalidIndex` on non-numeric or out-of-range input.
    pub fn mark_task_as_done(&mut self, raw_index: &str) -> StoreResult<()> {
        let outcome = self.mark_done_inner(raw_index);
        // Guaranteed trailing listing regardless of outcome.
        self.list_tasks();
        outcome
    }

    fn mark_done_inner(&mut self, raw_index: &str) -> StoreResult<()> {
        let index = self.parse_position(raw_index).inspect_err(|_| {
            warn!(
                "event=task_done module=store status=error raw_index={}",
                raw_index.trim()
            );
        })?;

        let entry = &mut self.entries[index];
        entry.task.mark_done();
        info!(
            "event=task_done module=store status=ok position={} seq={}",
            index + 1,
            entry.seq
        );
        self.sink.task_done(&self.entries[index].task);
        Ok(())
    }

    /// Emits the listing header and one line per task in display order.
    pub fn list_tasks(&mut self) {
        self.sink.listing_header();
        for (offset, entry) in self.entries.iter().enumerate() {
            self.sink.listing_line(offset + 1, &entry.task.to_string());
        }
    }

    /// Ordered snapshot for read-only collaborators.
    pub fn tasks(&self) -> Vec<Task> {
        self.entries.iter().map(|entry| entry.task.clone()).collect()
    }

    /// Current task count.
    pub fn task_count(&self) -> usize {
        self.entries.len()
    }

    /// Task at a 0-based index in the current sorted materialization.
    ///
    /// # Errors
    /// `IndexOutOfRange` when `index >= task_count()`.
    pub fn get_task(&self, index: usize) -> StoreResult<&Task> {
        self.entries
            .get(index)
            .map(|entry| &entry.task)
            .ok_or(StoreError::IndexOutOfRange {
                index,
                count: self.entries.len(),
            })
    }

    /// Bulk-inserts already-constructed tasks without notifications.
    ///
    /// Seeding path for external stores handing back a persisted entity
    /// list; each task goes through the same sorted insertion as
    /// `add_task`.
    pub fn seed(&mut self, tasks: impl IntoIterator<Item = Task>) {
        let mut seeded = 0usize;
        for task in tasks {
            self.insert_sorted(task);
            seeded += 1;
        }
        info!(
            "event=store_seeded module=store status=ok seeded={} count={}",
            seeded,
            self.entries.len()
        );
    }

    /// Stable sorted insert: the new entry lands after every entry that
    /// compares less than or equal to it, so equal-comparing tasks keep
    /// insertion order. Returns the insertion position.
    fn insert_sorted(&mut self, task: Task) -> usize {
        let position = self
            .entries
            .iter()
            .position(|existing| compare_tasks(&task, &existing.task) == Ordering::Less)
            .unwrap_or(self.entries.len());

        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(position, TaskEntry { seq, task });
        position
    }

    /// Parses raw 1-based index text into a bounds-checked 0-based index.
    fn parse_position(&self, raw_index: &str) -> StoreResult<usize> {
        let invalid = || StoreError::InvalidIndex(raw_index.trim().to_string());

        let position: usize = raw_index.trim().parse().map_err(|_| invalid())?;
        let index = position.checked_sub(1).ok_or_else(invalid)?;
        if index >= self.entries.len() {
            return Err(invalid());
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::{compare_tasks, TaskStore};
    use crate::model::task::Task;
    use crate::notify::SilentSink;
    use std::cmp::Ordering;

    #[test]
    fn todos_compare_equal_and_precede_dated() {
        let todo_a = Task::todo("a", false);
        let todo_b = Task::todo("b", false);
        let dated = Task::deadline("d", "2 Dec 2019, 6:00 PM", false);

        assert_eq!(compare_tasks(&todo_a, &todo_b), Ordering::Equal);
        assert_eq!(compare_tasks(&todo_a, &dated), Ordering::Less);
        assert_eq!(compare_tasks(&dated, &todo_a), Ordering::Greater);
    }

    #[test]
    fn unparsable_date_compares_equal_not_panicking() {
        let bad = Task::event("broken", "not a date", false);
        let good = Task::deadline("fine", "2 Dec 2019, 6:00 PM", false);
        assert_eq!(compare_tasks(&bad, &good), Ordering::Equal);
        assert_eq!(compare_tasks(&good, &bad), Ordering::Equal);
    }

    #[test]
    fn parse_position_rejects_zero_and_garbage() {
        let mut store = TaskStore::new(SilentSink);
        store.seed([Task::todo("only", false)]);

        assert!(store.parse_position("0").is_err());
        assert!(store.parse_position("abc").is_err());
        assert!(store.parse_position("2").is_err());
        assert_eq!(store.parse_position(" 1 ").unwrap(), 0);
    }
}
