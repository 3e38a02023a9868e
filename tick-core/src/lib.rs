//! tick-core: task model, persistence, and command execution for the tick CLI.

pub mod command;
pub mod error;
pub mod list;
pub mod storage;
pub mod task;
pub mod ui;

pub use command::Command;
pub use error::{Error, Result};
pub use list::TaskList;
pub use storage::Storage;
pub use task::{Task, TaskKind, parse_timestamp, SAVE_TIME_FORMAT};
pub use ui::Ui;
