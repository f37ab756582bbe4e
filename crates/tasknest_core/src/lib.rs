//! Core domain logic for TaskNest.
//! This crate is the single source of truth for task ordering and storage.

pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod parse;
pub mod repo;
pub mod store;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging};
pub use model::task::{Task, TaskKind};
pub use notify::{NotificationSink, SilentSink};
pub use parse::command::{split_by_clause, ClauseSplit, CommandError, CommandResult};
pub use parse::date::{format_date, parse_date, DateFormatError, DateResult};
pub use repo::task_repo::{RepoError, RepoResult, SqliteTaskRepository, TaskRepository};
pub use store::task_store::{
    compare_tasks, StoreError, StoreResult, TaskStore, DEADLINE_CLAUSE,
    DEADLINE_DESCRIPTION_OFFSET, EVENT_CLAUSE, EVENT_DESCRIPTION_OFFSET,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
