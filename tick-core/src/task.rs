//! Task model: the three task variants and their canonical save-file line.
//!
//! `to_record` here and the line parser in `storage` are the two halves of
//! one contract: a task renders as exactly one line and reconstructs from
//! that same line with nothing lost.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Timestamp pattern in the save file: `2019-10-15 1800`. Minute precision,
/// no timezone. Stable across versions; old files must keep loading.
pub const SAVE_TIME_FORMAT: &str = "%Y-%m-%d %H%M";

/// Timestamp pattern in listings: `Oct 15 2019 18:00`.
pub const DISPLAY_TIME_FORMAT: &str = "%b %d %Y %H:%M";

/// Field separator in the save file. Exactly space-pipe-space.
pub const FIELD_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    Todo,
    Deadline { due: NaiveDateTime },
    Event { start: NaiveDateTime, end: NaiveDateTime },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    pub fn deadline(description: impl Into<String>, due: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { due },
        }
    }

    pub fn event(description: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event { start, end },
        }
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// One-letter tag identifying the variant in the save file.
    pub fn tag(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    /// Render as one line of the save file (without the trailing newline).
    pub fn to_record(&self) -> String {
        let marker = if self.done { "1" } else { "0" };
        let mut fields = vec![
            self.tag().to_string(),
            marker.to_string(),
            self.description.clone(),
        ];
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { due } => {
                fields.push(due.format(SAVE_TIME_FORMAT).to_string());
            }
            TaskKind::Event { start, end } => {
                fields.push(start.format(SAVE_TIME_FORMAT).to_string());
                fields.push(end.format(SAVE_TIME_FORMAT).to_string());
            }
        }
        fields.join(FIELD_SEPARATOR)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.tag(), check, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due } => {
                write!(f, " (by: {})", due.format(DISPLAY_TIME_FORMAT))
            }
            TaskKind::Event { start, end } => write!(
                f,
                " (from: {} to: {})",
                start.format(DISPLAY_TIME_FORMAT),
                end.format(DISPLAY_TIME_FORMAT)
            ),
        }
    }
}

/// Parse a save-format timestamp (`2019-10-15 1800`).
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, SAVE_TIME_FORMAT).map_err(|source| Error::Timestamp {
        text: text.to_string(),
        source,
    })
}
