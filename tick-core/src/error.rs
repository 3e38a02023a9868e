//! The single error channel for storage and command execution.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Read or write fault on the task file. A missing file on load is not
    /// an error (fresh start); everything else lands here.
    #[error("task file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A save-file line that does not match the expected layout. Carries the
    /// 1-based line number so the operator can find it.
    #[error("task file line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// A timestamp that does not match the `2019-10-15 1800` pattern.
    #[error("invalid timestamp {text:?}: {source}")]
    Timestamp {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A command addressed a task position that does not exist.
    #[error("invalid task number")]
    InvalidIndex,
}
