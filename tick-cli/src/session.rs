//! The interactive session: one command per input line until `bye` or EOF.

use anyhow::{Context, Result};
use std::io::{self, BufRead};
use tick_core::{Storage, TaskList, Ui};

use crate::parser;
use crate::ui::ConsoleUi;

pub fn run(storage: Storage) -> Result<()> {
    // Fail fast on a corrupt file: starting empty here would overwrite it
    // on the first command.
    let tasks = storage
        .load()
        .with_context(|| format!("loading {}", storage.path().display()))?;
    let mut tasks = TaskList::from_tasks(tasks);
    let mut ui = ConsoleUi::new();

    ui.show_greeting(tasks.len());

    let stdin = io::stdin();
    ui.prompt();
    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        let line = line.trim();
        if line.is_empty() {
            ui.prompt();
            continue;
        }

        match parser::parse(line) {
            Ok(command) => match command.execute(&mut tasks, &mut ui, &storage) {
                Ok(()) => {
                    if command.is_exit() {
                        return Ok(());
                    }
                }
                // Recoverable at session level: render and keep going.
                Err(e) => ui.show_error(&e.to_string()),
            },
            Err(e) => ui.show_error(&e.to_string()),
        }

        ui.prompt();
    }

    // EOF behaves like `bye`.
    ui.show_farewell();
    Ok(())
}
