//! File-backed persistence for the task list.
//!
//! One task per line, fields separated by `" | "`, timestamps in the
//! `2019-10-15 1800` pattern. Every load reads the whole file and every
//! save truncates and rewrites it; there is no partial update. Loading is
//! fail-fast: one malformed line aborts the whole load, no partial list.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::task::{FIELD_SEPARATOR, Task, parse_timestamp};

#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// The path is taken as-is; nothing is validated until the first
    /// load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every task from the file, in file order. A missing file is a
    /// fresh start, not an error.
    pub fn load(&self) -> Result<Vec<Task>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let mut tasks = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            tasks.push(parse_record(line, i + 1)?);
        }
        Ok(tasks)
    }

    /// Overwrite the file with one line per task, input order preserved.
    /// The caller's in-memory list is never touched by a failed save.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::Io {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
        }

        let mut out = String::new();
        for task in tasks {
            out.push_str(&task.to_record());
            out.push('\n');
        }
        fs::write(&self.path, out).map_err(|e| Error::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Reconstruct one task from one save-file line.
fn parse_record(line: &str, line_no: usize) -> Result<Task> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let malformed = |reason: &str| Error::Malformed {
        line: line_no,
        reason: reason.to_string(),
    };

    match fields[0] {
        "T" => {
            if fields.len() < 3 {
                return Err(malformed("insufficient details for a todo task"));
            }
            Ok(restore(Task::todo(fields[2]), fields[1]))
        }
        "D" => {
            if fields.len() < 4 {
                return Err(malformed("insufficient details for a deadline task"));
            }
            let due = parse_timestamp(fields[3])?;
            Ok(restore(Task::deadline(fields[2], due), fields[1]))
        }
        "E" => {
            if fields.len() < 5 {
                return Err(malformed("insufficient details for an event task"));
            }
            let start = parse_timestamp(fields[3])?;
            let end = parse_timestamp(fields[4])?;
            Ok(restore(Task::event(fields[2], start, end), fields[1]))
        }
        _ => Err(malformed("invalid task type in file")),
    }
}

/// Field 1 is the completion marker: `1` means done, anything else open.
fn restore(mut task: Task, marker: &str) -> Task {
    task.done = marker == "1";
    task
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::tempdir;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_round_trip_all_variants() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("tasks.txt"));

        let mut deadline = Task::deadline("return book", ts(2019, 10, 15, 18, 0));
        deadline.mark_done();
        let tasks = vec![
            Task::todo("read book"),
            deadline,
            Task::event(
                "project meeting",
                ts(2019, 10, 16, 14, 0),
                ts(2019, 10, 16, 16, 0),
            ),
        ];

        storage.save(&tasks).unwrap();
        let loaded = storage.load().unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn done_marker_survives_round_trip() {
        // Pins the open-question decision: the marker is read back on load,
        // not just written, so completed tasks stay completed across runs.
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "T | 1 | read book\nT | 0 | buy milk\n").unwrap();

        let loaded = Storage::new(&path).load().unwrap();
        assert!(loaded[0].done);
        assert!(!loaded[1].done);
    }

    #[test]
    fn test_missing_file_is_a_fresh_start() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("does-not-exist.txt"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_line_aborts_whole_load() {
        // One valid line, then a deadline with too few fields. No partial
        // one-task result, the whole load fails.
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "T | 0 | read book\nD | 0 | return book\n").unwrap();

        let err = Storage::new(&path).load().unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "X | 0 | mystery\n").unwrap();

        let err = Storage::new(&path).load().unwrap_err();
        match err {
            Error::Malformed { line, reason } => {
                assert_eq!(line, 1);
                assert_eq!(reason, "invalid task type in file");
            }
            other => panic!("expected a malformed-line error, got {other:?}"),
        }
    }

    #[test]
    fn test_short_todo_line_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "T | 0\n").unwrap();

        assert!(matches!(
            Storage::new(&path).load(),
            Err(Error::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn test_bad_timestamp_aborts_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "D | 0 | return book | 15/10/2019\n").unwrap();

        assert!(matches!(
            Storage::new(&path).load(),
            Err(Error::Timestamp { .. })
        ));
    }

    #[test]
    fn test_save_truncates_previous_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        let storage = Storage::new(&path);

        storage.save(&[Task::todo("first")]).unwrap();
        storage.save(&[Task::todo("second")]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "T | 0 | second\n");
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("tasks.txt");
        let storage = Storage::new(&path);

        storage.save(&[Task::todo("read book")]).unwrap();
        assert_eq!(storage.load().unwrap().len(), 1);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "T | 0 | read book\n\nT | 0 | buy milk\n").unwrap();

        let loaded = Storage::new(&path).load().unwrap();
        assert_eq!(loaded.len(), 2);
    }
}
