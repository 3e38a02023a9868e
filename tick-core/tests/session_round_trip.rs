//! End-to-end persistence: commands against one storage file, then reloads
//! that behave like fresh sessions.

use tempfile::tempdir;
use tick_core::{Command, Storage, Task, TaskList, Ui, parse_timestamp};

struct SilentUi;

impl Ui for SilentUi {
    fn show_added(&mut self, _task: &Task, _total: usize) {}
    fn show_completed(&mut self, _task: &Task) {}
    fn show_deleted(&mut self, _task: &Task, _remaining: usize) {}
    fn show_list(&mut self, _tasks: &TaskList) {}
    fn show_matches(&mut self, _matches: &[(usize, &Task)]) {}
    fn show_error(&mut self, _message: &str) {}
    fn show_farewell(&mut self) {}
}

#[test]
fn test_session_survives_restart() {
    let dir = tempdir().unwrap();
    let storage = Storage::new(dir.path().join("tasks.txt"));
    let mut ui = SilentUi;

    // First session: build up a list and complete one task.
    let mut tasks = TaskList::from_tasks(storage.load().unwrap());
    assert!(tasks.is_empty());

    Command::Add(Task::todo("read book"))
        .execute(&mut tasks, &mut ui, &storage)
        .unwrap();
    Command::Add(Task::deadline(
        "return book",
        parse_timestamp("2019-10-15 1800").unwrap(),
    ))
    .execute(&mut tasks, &mut ui, &storage)
    .unwrap();
    Command::Add(Task::event(
        "project meeting",
        parse_timestamp("2019-10-16 1400").unwrap(),
        parse_timestamp("2019-10-16 1600").unwrap(),
    ))
    .execute(&mut tasks, &mut ui, &storage)
    .unwrap();
    Command::complete(2)
        .execute(&mut tasks, &mut ui, &storage)
        .unwrap();

    // Second session: everything reloads, including the done flag.
    let mut tasks = TaskList::from_tasks(storage.load().unwrap());
    assert_eq!(tasks.len(), 3);
    let returned = tasks.get(1).unwrap();
    assert_eq!(returned.description, "return book");
    assert!(returned.done);
    assert!(!tasks.get(0).unwrap().done);

    Command::delete(1)
        .execute(&mut tasks, &mut ui, &storage)
        .unwrap();

    // Third session: the deletion stuck and order is preserved.
    let reloaded = storage.load().unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded[0].description, "return book");
    assert_eq!(reloaded[1].description, "project meeting");
}
