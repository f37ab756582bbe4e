use tasknest_core::{Task, TaskKind};

#[test]
fn todo_renders_with_tag_and_marker() {
    let task = Task::todo("read book", false);
    assert_eq!(task.to_string(), "[T][ ] read book");
    assert_eq!(task.kind(), TaskKind::Todo);
    assert_eq!(task.due(), None);
    assert!(!task.is_done());
}

#[test]
fn dated_tasks_render_their_clause_suffix() {
    let deadline = Task::deadline("submit report", "2 Dec 2019, 6:00 PM", false);
    assert_eq!(
        deadline.to_string(),
        "[D][ ] submit report (by: 2 Dec 2019, 6:00 PM)"
    );

    let event = Task::event("standup", "5 Jan 2020, 9:30 AM", true);
    assert_eq!(event.to_string(), "[E][X] standup (at: 5 Jan 2020, 9:30 AM)");
    assert_eq!(event.due(), Some("5 Jan 2020, 9:30 AM"));
}

#[test]
fn mark_done_is_idempotent() {
    let mut task = Task::todo("read book", false);
    task.mark_done();
    assert!(task.is_done());
    assert_eq!(task.to_string(), "[T][X] read book");

    task.mark_done();
    assert!(task.is_done());
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task::deadline("submit report", "2 Dec 2019, 6:00 PM", false);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["kind"], "deadline");
    assert_eq!(json["description"], "submit report");
    assert_eq!(json["due"], "2 Dec 2019, 6:00 PM");
    assert_eq!(json["done"], false);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn kind_names_round_trip() {
    for kind in [TaskKind::Todo, TaskKind::Deadline, TaskKind::Event] {
        assert_eq!(TaskKind::from_str_opt(kind.as_str()), Some(kind));
    }
    assert_eq!(TaskKind::from_str_opt("chore"), None);
}
