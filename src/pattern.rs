//! Glob-based file discovery.
//!
//! ```
//! let mut files = fileio::glob("fixture/glob/**/*.txt")?;
//! files.sort();
//! assert_eq!(files, vec![
//!     std::path::PathBuf::from("fixture/glob/bar/bar.txt"),
//!     std::path::PathBuf::from("fixture/glob/foo.txt"),
//! ]);
//! # Ok::<(), fileio::Error>(())
//! ```

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Options for glob matching, passed by value with explicit defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlobOptions {
    /// Match dot-prefixed entries and descend into dot-prefixed directories.
    /// Hidden entries are excluded by default.
    pub include_hidden: bool,
}

/// Resolve a glob pattern with default options.
///
/// A pattern matching nothing yields an empty vec, not an error. Order is
/// matcher-defined; sort if you need determinism.
pub fn glob(pattern: &str) -> Result<Vec<PathBuf>> {
    glob_with(pattern, &GlobOptions::default())
}

/// Resolve a glob pattern: `**` recursive segments, `*` wildcards, literals.
pub fn glob_with(pattern: &str, opts: &GlobOptions) -> Result<Vec<PathBuf>> {
    let match_opts = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: false,
        require_literal_leading_dot: !opts.include_hidden,
    };
    let entries = glob::glob_with(pattern, match_opts).map_err(|e| Error::Match {
        pattern: pattern.to_owned(),
        reason: e.to_string(),
    })?;

    let mut found = vec![];
    for entry in entries {
        match entry {
            Ok(path) => found.push(path),
            Err(e) => {
                let path = e.path().to_path_buf();
                return Err(Error::read_io(path, e.into_error()));
            }
        }
    }
    Ok(found)
}

/// Recursively find all files under `folder` with the given extension.
pub fn glob_files(folder: &str, extension: &str) -> Result<Vec<PathBuf>> {
    let sep = if folder.ends_with('/') { "" } else { "/" };
    glob(&format!("{folder}{sep}**/*.{extension}"))
}
