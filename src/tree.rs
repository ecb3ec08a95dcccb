//! Shell-like tree operations: existence, recursive delete and create,
//! single-file copy, and structure-preserving folder copy.

use crate::error::{Error, Result};
use crate::path::{expand, relative_to};
use crate::pattern::{glob_with, GlobOptions};
use log::debug;
use std::io::ErrorKind;
use std::path::Path;

/// Whether a file or directory exists at `path`, after `~` expansion.
///
/// Never fails for a missing path; that's the whole point.
pub fn exists(path: impl AsRef<Path>) -> bool {
    expand(path).exists()
}

/// Delete a file, or a directory and everything under it.
///
/// Idempotent: an already-absent target is success, including losing a
/// race with another deleter.
pub fn remove_recursive(path: impl AsRef<Path>) -> Result<()> {
    let path = expand(path);
    let removed = if path.is_dir() {
        std::fs::remove_dir_all(&path)
    } else {
        std::fs::remove_file(&path)
    };
    match removed {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::write_io(&path, e)),
    }
}

/// Create `path` and all missing ancestor directories. Idempotent.
pub fn make_dirs_recursive(path: impl AsRef<Path>) -> Result<()> {
    let path = expand(path);
    std::fs::create_dir_all(&path).map_err(|e| Error::write_io(&path, e))
}

/// Copy one file.
///
/// If `dest` names an existing directory the file is copied into it under
/// its own base name; otherwise `dest` is the literal destination.
pub fn copy_file(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let src = expand(src);
    let mut dest = expand(dest);
    if !src.exists() {
        return Err(Error::NotFound { path: src });
    }
    if dest.is_dir() {
        if let Some(name) = src.file_name() {
            dest.push(name);
        }
    }
    std::fs::copy(&src, &dest).map_err(|e| Error::write_io(&dest, e))?;
    Ok(())
}

/// Recursively copy `input_root` into `output_root`, preserving structure.
///
/// Enumerates `input_root/**/*`, recreates directories, and copies files,
/// creating `output_root` and any destination parents on the way. The copy
/// is additive: pre-existing content at `output_root` is left in place.
/// The first failure aborts, leaving a partially populated destination.
pub fn copy_tree(
    input_root: impl AsRef<Path>,
    output_root: impl AsRef<Path>,
    opts: &GlobOptions,
) -> Result<()> {
    let input_root = expand(input_root);
    let output_root = expand(output_root);

    let base = input_root.display().to_string();
    let pattern = format!("{}/**/*", base.trim_end_matches('/'));
    let entries = glob_with(&pattern, opts)?;
    debug!(
        "copy_tree: {} entries from {} to {}",
        entries.len(),
        input_root.display(),
        output_root.display()
    );

    std::fs::create_dir_all(&output_root).map_err(|e| Error::write_io(&output_root, e))?;
    for entry in entries {
        let rel = match relative_to(&entry, &input_root) {
            Some(rel) => rel,
            None => continue,
        };
        let dest = output_root.join(rel);
        if entry.is_dir() {
            std::fs::create_dir_all(&dest).map_err(|e| Error::write_io(&dest, e))?;
        } else {
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent).map_err(|e| Error::write_io(parent, e))?;
            }
            std::fs::copy(&entry, &dest).map_err(|e| Error::write_io(&dest, e))?;
        }
    }
    Ok(())
}
