//! Task value object and its user-visible textual form.
//!
//! # Responsibility
//! - Represent todo/deadline/event tasks as one tagged union.
//! - Render the stable single-line listing form.
//!
//! # Invariants
//! - `due` is `Some` exactly for `Deadline` and `Event` when built through
//!   the constructors, and holds canonical formatted date text.
//! - Only `done` is mutable after construction.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Discriminant for the three task variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Undated action item; always sorts ahead of dated tasks.
    Todo,
    /// Dated task with a `/by` due date.
    Deadline,
    /// Dated task with an `/at` occurrence date.
    Event,
}

impl TaskKind {
    /// Stable lowercase name used for persistence and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
        }
    }

    /// Parses the persisted name back into a kind.
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "todo" => Some(Self::Todo),
            "deadline" => Some(Self::Deadline),
            "event" => Some(Self::Event),
            _ => None,
        }
    }

    fn tag_letter(self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline => 'D',
            Self::Event => 'E',
        }
    }
}

/// One tracked task.
///
/// Fields stay private so the due date cannot be rewritten after
/// construction; the done flag mutates through [`Task::mark_done`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    kind: TaskKind,
    description: String,
    due: Option<String>,
    done: bool,
}

impl Task {
    /// Creates an undated todo.
    pub fn todo(description: impl Into<String>, done: bool) -> Self {
        Self {
            kind: TaskKind::Todo,
            description: description.into(),
            due: None,
            done,
        }
    }

    /// Creates a deadline carrying canonical due-date text.
    pub fn deadline(description: impl Into<String>, due: impl Into<String>, done: bool) -> Self {
        Self {
            kind: TaskKind::Deadline,
            description: description.into(),
            due: Some(due.into()),
            done,
        }
    }

    /// Creates an event carrying canonical occurrence-date text.
    pub fn event(description: impl Into<String>, due: impl Into<String>, done: bool) -> Self {
        Self {
            kind: TaskKind::Event,
            description: description.into(),
            due: Some(due.into()),
            done,
        }
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Canonical date text for dated kinds, `None` for todos.
    pub fn due(&self) -> Option<&str> {
        self.due.as_deref()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Sets the done flag. Idempotent; the sort position is unaffected
    /// because `done` is not an ordering key.
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let marker = if self.done { 'X' } else { ' ' };
        write!(
            f,
            "[{}][{}] {}",
            self.kind.tag_letter(),
            marker,
            self.description
        )?;
        match (self.kind, self.due.as_deref()) {
            (TaskKind::Deadline, Some(due)) => write!(f, " (by: {due})"),
            (TaskKind::Event, Some(due)) => write!(f, " (at: {due})"),
            _ => Ok(()),
        }
    }
}
