use tasknest_core::db::{open_db, open_db_in_memory};
use tasknest_core::{
    RepoError, SilentSink, SqliteTaskRepository, Task, TaskRepository, TaskStore,
};

fn sample_tasks() -> Vec<Task> {
    vec![
        Task::deadline("submit report", "2 Dec 2019, 6:00 PM", false),
        Task::todo("read book", true),
        Task::event("standup", "5 Jan 2019, 9:30 AM", false),
    ]
}

#[test]
fn replace_all_then_load_all_round_trips_in_order() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteTaskRepository::new(&mut conn);

    let tasks = sample_tasks();
    repo.replace_all(&tasks).unwrap();

    let loaded = repo.load_all().unwrap();
    assert_eq!(loaded, tasks);
}

#[test]
fn replace_all_discards_the_previous_list() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteTaskRepository::new(&mut conn);

    repo.replace_all(&sample_tasks()).unwrap();
    let shorter = vec![Task::todo("only survivor", false)];
    repo.replace_all(&shorter).unwrap();

    assert_eq!(repo.load_all().unwrap(), shorter);
}

#[test]
fn unknown_kind_row_is_rejected_as_invalid_data() {
    let mut conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO tasks (kind, description, due, done) VALUES ('chore', 'mop', NULL, 0);",
        [],
    )
    .unwrap();

    let repo = SqliteTaskRepository::new(&mut conn);
    let err = repo.load_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn dated_row_without_due_text_is_rejected() {
    let mut conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO tasks (kind, description, due, done) VALUES ('deadline', 'report', NULL, 0);",
        [],
    )
    .unwrap();

    let repo = SqliteTaskRepository::new(&mut conn);
    let err = repo.load_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn entity_list_survives_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tasks.db");

    {
        let mut conn = open_db(&db_path).unwrap();
        let mut repo = SqliteTaskRepository::new(&mut conn);
        repo.replace_all(&sample_tasks()).unwrap();
    }

    let mut conn = open_db(&db_path).unwrap();
    let repo = SqliteTaskRepository::new(&mut conn);
    assert_eq!(repo.load_all().unwrap(), sample_tasks());
}

#[test]
fn seeding_a_store_from_the_loaded_list_restores_display_order() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteTaskRepository::new(&mut conn);
    repo.replace_all(&sample_tasks()).unwrap();

    let mut store = TaskStore::new(SilentSink);
    store.seed(repo.load_all().unwrap());

    let descriptions: Vec<_> = store
        .tasks()
        .iter()
        .map(|task| task.description().to_string())
        .collect();
    assert_eq!(descriptions, ["read book", "standup", "submit report"]);
}
