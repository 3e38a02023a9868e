//! User commands over the task list.
//!
//! Each command mutates the list (or reads it), renders a confirmation
//! through the [`Ui`], and persists the full list. A failed command leaves
//! the list unchanged and writes nothing. Commands are single-use; there is
//! no retry or undo.

use crate::error::Result;
use crate::list::TaskList;
use crate::storage::Storage;
use crate::task::Task;
use crate::ui::Ui;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Task),
    List,
    Complete { index: usize },
    Delete { index: usize },
    Find { keyword: String },
    Exit,
}

impl Command {
    /// Mark the task at a 1-based user position as done.
    ///
    /// Converted to 0-based here; 0 wraps around and fails the bounds check
    /// like any other bad position.
    pub fn complete(user_index: usize) -> Self {
        Command::Complete {
            index: user_index.wrapping_sub(1),
        }
    }

    /// Delete the task at a 1-based user position.
    pub fn delete(user_index: usize) -> Self {
        Command::Delete {
            index: user_index.wrapping_sub(1),
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    pub fn execute(&self, tasks: &mut TaskList, ui: &mut dyn Ui, storage: &Storage) -> Result<()> {
        match self {
            Command::Add(task) => {
                tasks.add(task.clone());
                ui.show_added(task, tasks.len());
                storage.save(tasks.tasks())
            }

            Command::List => {
                ui.show_list(tasks);
                storage.save(tasks.tasks())
            }

            Command::Complete { index } => {
                tasks.get_mut(*index)?.mark_done();
                ui.show_completed(tasks.get(*index)?);
                storage.save(tasks.tasks())
            }

            Command::Delete { index } => {
                let removed = tasks.remove(*index)?;
                ui.show_deleted(&removed, tasks.len());
                storage.save(tasks.tasks())
            }

            Command::Find { keyword } => {
                let needle = keyword.to_lowercase();
                let matches: Vec<(usize, &Task)> = tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.description.to_lowercase().contains(&needle))
                    .map(|(i, task)| (i + 1, task))
                    .collect();
                ui.show_matches(&matches);
                storage.save(tasks.tasks())
            }

            Command::Exit => {
                ui.show_farewell();
                Ok(())
            }
        }
    }
}
