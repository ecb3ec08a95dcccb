//! Whole-file and line-oriented text IO.
//!
//! Reads normalize Windows line endings, so every consumer sees `\n` only.
//!
//! ```
//! let lines = fileio::read_lines("fixture/text/input.txt")?;
//! assert_eq!(lines, vec!["aaa", "bbbaaa", "bbb", ""]);
//! # Ok::<(), fileio::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::path::expand;
use std::io::Write;
use std::path::Path;

/// What to write: a whole body, or a sequence of lines joined with `\n`.
///
/// No trailing newline is ever added; lines come back out exactly as they
/// went in.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    Lines(Vec<String>),
}

impl Content {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Lines(lines) => lines.join("\n"),
        }
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}
impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
impl From<Vec<String>> for Content {
    fn from(lines: Vec<String>) -> Self {
        Self::Lines(lines)
    }
}
impl From<&[&str]> for Content {
    fn from(lines: &[&str]) -> Self {
        Self::Lines(lines.iter().map(|s| s.to_string()).collect())
    }
}

/// Options for [`write_text`], passed by value with explicit defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WriteOptions {
    /// Append to the file instead of truncating it. Defaults to truncate.
    pub append: bool,
}

/// Read a whole file into a string, with `\r\n` normalized to `\n`.
///
/// A leading `~` in the path is expanded first. A missing file is
/// [`Error::NotFound`]; any other IO failure is [`Error::Read`].
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = expand(path);
    let raw = std::fs::read_to_string(&path).map_err(|e| Error::read_io(&path, e))?;
    Ok(raw.replace("\r\n", "\n"))
}

/// Read a file as a sequence of lines.
///
/// This is [`read_text`] split on `\n`, so a file ending in a newline
/// yields a trailing empty entry. That's deliberate and preserved for
/// compatibility with the write side's no-added-newline rule.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(read_text(path)?.split('\n').map(str::to_owned).collect())
}

/// Write text or lines to a file, creating parent directories as needed.
pub fn write_text(
    path: impl AsRef<Path>,
    content: impl Into<Content>,
    opts: &WriteOptions,
) -> Result<()> {
    let path = expand(path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| Error::write_io(parent, e))?;
        }
    }

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .append(opts.append)
        .truncate(!opts.append)
        .open(&path)
        .map_err(|e| Error::write_io(&path, e))?;
    file.write_all(content.into().into_string().as_bytes())
        .map_err(|e| Error::write_io(&path, e))?;
    Ok(())
}
