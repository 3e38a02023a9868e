//! Console implementation of the rendering seam.

use std::io::{self, Write};
use tick_core::{Task, TaskList, Ui};

#[derive(Debug, Default)]
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }

    pub fn show_greeting(&mut self, count: usize) {
        println!("Hello, this is tick.");
        if count == 0 {
            println!("The list is empty. Try `todo read book`.");
        } else {
            println!("Tracking {count} task{}. `list` shows them.", plural(count));
        }
    }

    pub fn prompt(&mut self) {
        print!("> ");
        let _ = io::stdout().flush();
    }
}

impl Ui for ConsoleUi {
    fn show_added(&mut self, task: &Task, total: usize) {
        println!("Added: {task}");
        println!("Now tracking {total} task{}.", plural(total));
    }

    fn show_completed(&mut self, task: &Task) {
        println!("Marked as done: {task}");
    }

    fn show_deleted(&mut self, task: &Task, remaining: usize) {
        println!("Deleted: {task}");
        println!("{remaining} task{} left.", plural(remaining));
    }

    fn show_list(&mut self, tasks: &TaskList) {
        if tasks.is_empty() {
            println!("Nothing on the list.");
            return;
        }
        for (i, task) in tasks.iter().enumerate() {
            println!("{:>3}. {task}", i + 1);
        }
    }

    fn show_matches(&mut self, matches: &[(usize, &Task)]) {
        if matches.is_empty() {
            println!("No matching tasks.");
            return;
        }
        for (position, task) in matches {
            println!("{position:>3}. {task}");
        }
    }

    fn show_error(&mut self, message: &str) {
        println!("error: {message}");
    }

    fn show_farewell(&mut self) {
        println!("Bye. Your list is saved.");
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
