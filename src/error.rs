//! Error kinds shared by every operation in the crate.
//!
//! Failures surface immediately and unchanged: there are no retries and no
//! silent recovery anywhere. The two deliberate tolerances live elsewhere
//! (`tree::exists` answers `false` for missing paths, and
//! `tree::remove_recursive` treats an absent target as success).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The path was required to exist and doesn't.
    #[error("no such path: {}", .path.display())]
    NotFound { path: PathBuf },

    /// An IO failure while reading (permissions, device errors, ...).
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An IO failure while writing, copying, or creating directories.
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file was readable but its contents failed to decode.
    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Invalid pattern syntax.
    #[error("bad pattern {pattern:?}: {reason}")]
    Match { pattern: String, reason: String },
}

impl Error {
    /// Classify a read-side IO failure, splitting out missing paths.
    pub(crate) fn read_io(path: impl AsRef<Path>, e: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match e.kind() {
            ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Read { path, source: e },
        }
    }

    /// Wrap a write-side IO failure.
    pub(crate) fn write_io(path: impl AsRef<Path>, e: std::io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source: e,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_io_splits_not_found() {
        let e = Error::read_io("/no/such/file", ErrorKind::NotFound.into());
        assert!(matches!(e, Error::NotFound { .. }));

        let e = Error::read_io("/no/such/file", ErrorKind::PermissionDenied.into());
        assert!(matches!(e, Error::Read { .. }));
    }

    #[test]
    fn display_includes_path() {
        let e = Error::write_io("/some/dest", ErrorKind::PermissionDenied.into());
        assert!(e.to_string().contains("/some/dest"));
    }
}
