//! Turn one line of user input into a [`Command`].
//!
//! Grammar, one command per line:
//! - `todo <description>`
//! - `deadline <description> /by <yyyy-mm-dd hhmm>`
//! - `event <description> /from <yyyy-mm-dd hhmm> /to <yyyy-mm-dd hhmm>`
//! - `list`, `done <n>`, `delete <n>`, `find <keyword>`, `bye`

use anyhow::{Result, bail};
use tick_core::{Command, Task, parse_timestamp};

pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "list" => Ok(Command::List),
        "bye" => Ok(Command::Exit),

        "todo" => {
            if rest.is_empty() {
                bail!("a todo needs a description, e.g. `todo read book`");
            }
            Ok(Command::Add(Task::todo(rest)))
        }

        "deadline" => {
            let Some((description, due)) = split_marker(rest, "/by") else {
                bail!("a deadline needs `/by`, e.g. `deadline return book /by 2019-10-15 1800`");
            };
            Ok(Command::Add(Task::deadline(description, parse_timestamp(due)?)))
        }

        "event" => {
            let Some((description, times)) = split_marker(rest, "/from") else {
                bail!("an event needs `/from` and `/to`, e.g. `event meeting /from 2019-10-15 1400 /to 2019-10-15 1600`");
            };
            let Some((start, end)) = split_marker(times, "/to") else {
                bail!("an event needs `/to` after `/from`");
            };
            Ok(Command::Add(Task::event(
                description,
                parse_timestamp(start)?,
                parse_timestamp(end)?,
            )))
        }

        "done" | "mark" => Ok(Command::complete(parse_index(rest)?)),
        "delete" => Ok(Command::delete(parse_index(rest)?)),

        "find" => {
            if rest.is_empty() {
                bail!("find needs a keyword, e.g. `find book`");
            }
            Ok(Command::Find {
                keyword: rest.to_string(),
            })
        }

        other => bail!("unknown command: {other:?} (try `list`, `todo`, `deadline`, `event`, `done`, `delete`, `find`, `bye`)"),
    }
}

/// Split `text` at `marker`, trimming both halves. None if the marker is
/// missing or either half comes out empty.
fn split_marker<'a>(text: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    let (before, after) = text.split_once(marker)?;
    let before = before.trim();
    let after = after.trim();
    if before.is_empty() || after.is_empty() {
        return None;
    }
    Some((before, after))
}

fn parse_index(text: &str) -> Result<usize> {
    match text.trim().parse() {
        Ok(n) => Ok(n),
        Err(_) => bail!("expected a task number, got {text:?}"),
    }
}
