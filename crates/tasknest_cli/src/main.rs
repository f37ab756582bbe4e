//! Interactive command loop for the TaskNest store.
//!
//! # Responsibility
//! - Wire stdin commands to `tasknest_core` store operations.
//! - Print add/delete/done/listing notifications to the console.
//! - Mirror every mutation into the optional SQLite entity store.

use log::warn;
use std::error::Error;
use std::io::{self, BufRead, Write};
use tasknest_core::{
    default_log_level, init_logging, open_db, split_by_clause, NotificationSink,
    SqliteTaskRepository, Task, TaskKind, TaskRepository, TaskStore, DEADLINE_CLAUSE,
    DEADLINE_DESCRIPTION_OFFSET, EVENT_CLAUSE, EVENT_DESCRIPTION_OFFSET,
};

const GREETING: &str = "Hello! I'm TaskNest. What can I do for you?";
const FAREWELL: &str = "Bye. Hope to see you again soon!";
const LIST_HEADER: &str = "Here are your scheduled tasks!";
const DONE_HEADER: &str = "Nice! I've marked this task as done:";

/// Prints store notifications in the interactive console style.
struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn task_added(&mut self, task: &Task, count: usize) {
        println!("Got it. I've added this task:");
        println!("  {task}");
        println!("Now you have {count} task{} in the list.", plural(count));
    }

    fn task_deleted(&mut self, task: &Task, count: usize) {
        println!("Noted. I've removed this task:");
        println!("  {task}");
        println!("Now you have {count} task{} in the list.", plural(count));
    }

    fn task_done(&mut self, task: &Task) {
        println!("{DONE_HEADER}");
        println!("  {task}");
    }

    fn listing_header(&mut self) {
        println!("{LIST_HEADER}");
    }

    fn listing_line(&mut self, position: usize, rendered: &str) {
        println!("{position}. {rendered}");
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn main() {
    if let Ok(log_dir) = std::env::var("TASKNEST_LOG_DIR") {
        if let Err(message) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {message}");
        }
    }

    let db_path = std::env::args().nth(1);
    let mut conn = match db_path {
        Some(path) => match open_db(&path) {
            Ok(conn) => Some(conn),
            Err(err) => {
                eprintln!("could not open task database `{path}`: {err}");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let mut store = TaskStore::new(ConsoleSink);
    if let Some(conn) = conn.as_mut() {
        let repo = SqliteTaskRepository::new(conn);
        match repo.load_all() {
            Ok(tasks) => store.seed(tasks),
            Err(err) => {
                eprintln!("could not load saved tasks: {err}");
                std::process::exit(1);
            }
        }
    }

    println!("{GREETING}");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "bye" {
            break;
        }

        match run_command(&mut store, trimmed) {
            Ok(mutated) => {
                if mutated {
                    if let Some(conn) = conn.as_mut() {
                        let mut repo = SqliteTaskRepository::new(conn);
                        if let Err(err) = repo.replace_all(&store.tasks()) {
                            warn!("event=persist module=cli status=error error={err}");
                            eprintln!("could not save tasks: {err}");
                        }
                    }
                }
            }
            Err(err) => println!("Oops: {err}"),
        }
        let _ = io::stdout().flush();
    }

    println!("{FAREWELL}");
}

/// Dispatches one raw command line. Returns whether the store mutated.
fn run_command(
    store: &mut TaskStore<ConsoleSink>,
    raw: &str,
) -> Result<bool, Box<dyn Error>> {
    let keyword = raw.split_whitespace().next().unwrap_or("");
    match keyword {
        "list" => {
            store.list_tasks();
            Ok(false)
        }
        "todo" => {
            let split = split_by_clause(raw, "todo", 0, true)?;
            store.add(TaskKind::Todo, &split)?;
            Ok(true)
        }
        "deadline" => {
            let split = split_by_clause(raw, DEADLINE_CLAUSE, DEADLINE_DESCRIPTION_OFFSET, false)?;
            store.add(TaskKind::Deadline, &split)?;
            Ok(true)
        }
        "event" => {
            let split = split_by_clause(raw, EVENT_CLAUSE, EVENT_DESCRIPTION_OFFSET, false)?;
            store.add(TaskKind::Event, &split)?;
            Ok(true)
        }
        "done" => {
            let split = split_by_clause(raw, "done", 0, true)?;
            store.mark_task_as_done(&split.after)?;
            Ok(true)
        }
        "delete" => {
            let split = split_by_clause(raw, "delete", 0, true)?;
            store.delete_task(&split.after)?;
            Ok(true)
        }
        other => {
            println!("I don't know the command `{other}`.");
            println!("Try: todo, deadline, event, done, delete, list, bye");
            Ok(false)
        }
    }
}
