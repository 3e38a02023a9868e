//! Rendering seam between command execution and the terminal.

use crate::list::TaskList;
use crate::task::Task;

/// Everything a command needs to tell the user. The CLI implements this
/// over stdout; tests substitute a recording double.
pub trait Ui {
    fn show_added(&mut self, task: &Task, total: usize);
    fn show_completed(&mut self, task: &Task);
    fn show_deleted(&mut self, task: &Task, remaining: usize);
    fn show_list(&mut self, tasks: &TaskList);
    /// Matches keep their original 1-based positions so the user can act on
    /// them with `done`/`delete` directly.
    fn show_matches(&mut self, matches: &[(usize, &Task)]);
    fn show_error(&mut self, message: &str);
    fn show_farewell(&mut self);
}
