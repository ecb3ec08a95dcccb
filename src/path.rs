//! Path helpers: `~` expansion and root-relative computation.

use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` component to the current user's home directory.
///
/// Paths without a leading `~`, and environments with no resolvable home
/// directory, pass through unchanged.
pub fn expand(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Compute `path` relative to `root`, segment-aware.
///
/// Returns `None` when `path` is not under `root`. Whole segments are
/// compared, so a root that recurs as a substring deeper in the path
/// (`/tmp` inside `/tmp/archive/tmp-backup`) can't produce a bogus result
/// the way textual prefix replacement would.
pub fn relative_to(path: impl AsRef<Path>, root: impl AsRef<Path>) -> Option<PathBuf> {
    path.as_ref()
        .strip_prefix(root.as_ref())
        .ok()
        .map(Path::to_path_buf)
}
