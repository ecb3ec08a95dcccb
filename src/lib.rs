//! Small synchronous filesystem utilities.
//!
//! Everything here is a direct, blocking call into the filesystem or a
//! pattern matcher: glob discovery, line and JSON file reading, file
//! writing, shell-like tree operations, and gitignore-style filtering of
//! file lists. No caches, no shared state between calls.
//!
//! ```
//! use fileio::{glob, ignore_filter};
//!
//! // Find text files, then drop whatever the .testignore files exclude
//! let candidates = glob("fixture/ignore/**/*.txt")?;
//! let mut kept = ignore_filter(&candidates, "fixture/ignore", ".testignore")?;
//! kept.sort();
//! assert_eq!(kept.len(), 3);
//! # Ok::<(), fileio::Error>(())
//! ```

pub mod error;
pub mod ignore;
pub mod json;
pub mod path;
pub mod pattern;
pub mod text;
pub mod tree;

pub use error::{Error, Result};
pub use ignore::ignore_filter;
pub use json::{read_json, read_json_as};
pub use pattern::{glob, glob_files, glob_with, GlobOptions};
pub use text::{read_lines, read_text, write_text, Content, WriteOptions};
pub use tree::{copy_file, copy_tree, exists, make_dirs_recursive, remove_recursive};
