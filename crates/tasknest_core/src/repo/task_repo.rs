//! Task entity-list repository and SQLite implementation.
//!
//! # Responsibility
//! - Persist the full task list and hand it back for seeding.
//! - Reject invalid persisted rows instead of masking them.
//!
//! # Invariants
//! - `replace_all` is atomic: the previous list is gone only if the new
//!   one is fully written.
//! - `load_all` returns tasks in original insertion order; sorting is the
//!   in-memory store's job.

use crate::db::DbError;
use crate::model::task::{Task, TaskKind};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence-layer failure for task list storage.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Entity-list storage contract consumed by the CLI layer.
pub trait TaskRepository {
    /// Replaces the persisted list with `tasks`, atomically.
    fn replace_all(&mut self, tasks: &[Task]) -> RepoResult<()>;
    /// Loads the persisted list in insertion order.
    fn load_all(&self) -> RepoResult<Vec<Task>>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn replace_all(&mut self, tasks: &[Task]) -> RepoResult<()> {
        let tx = self.conn.transaction().map_err(DbError::Sqlite)?;

        tx.execute("DELETE FROM tasks;", [])?;
        for task in tasks {
            tx.execute(
                "INSERT INTO tasks (kind, description, due, done)
                 VALUES (?1, ?2, ?3, ?4);",
                params![
                    task.kind().as_str(),
                    task.description(),
                    task.due(),
                    i64::from(task.is_done()),
                ],
            )?;
        }

        tx.commit().map_err(DbError::Sqlite)?;
        Ok(())
    }

    fn load_all(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT kind, description, due, done
             FROM tasks
             ORDER BY id ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let kind_text: String = row.get("kind")?;
    let kind = TaskKind::from_str_opt(&kind_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid task kind `{kind_text}` in tasks.kind"))
    })?;

    let description: String = row.get("description")?;
    let due: Option<String> = row.get("due")?;

    let done = match row.get::<_, i64>("done")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid done value `{other}` in tasks.done"
            )));
        }
    };

    let task = match kind {
        TaskKind::Todo => Task::todo(description, done),
        TaskKind::Deadline | TaskKind::Event => {
            let due = due.ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "missing due date for `{kind_text}` task `{description}`"
                ))
            })?;
            if kind == TaskKind::Deadline {
                Task::deadline(description, due, done)
            } else {
                Task::event(description, due, done)
            }
        }
    };
    Ok(task)
}
