//! Reading commit messages from files or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Git's scissors line; everything below it is dropped from the message.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// Reads all of `path`, or stdin when no path (or `-`) is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Splits NUL-separated messages, as produced by `git log -z --format=%B`.
///
/// Blank entries are skipped.
pub fn split_messages(input: &str) -> Vec<&str> {
    input
        .split('\0')
        .filter(|message| !message.trim().is_empty())
        .collect()
}

/// Removes `#` comment lines and everything after the scissors line, the way
/// git cleans a message before committing.
pub fn strip_comments(message: &str) -> String {
    let mut lines = Vec::new();
    for line in message.lines() {
        if line == SCISSORS {
            break;
        }
        if !line.starts_with('#') {
            lines.push(line);
        }
    }
    lines.join("\n").trim_end().to_string()
}
