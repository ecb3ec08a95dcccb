//! Structured (JSON) file reading.

use crate::error::{Error, Result};
use crate::text::read_text;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a file and decode it as arbitrary JSON.
///
/// ```
/// let value = fileio::read_json("fixture/json/input.json")?;
/// assert_eq!(value["foo"], "bar");
/// # Ok::<(), fileio::Error>(())
/// ```
pub fn read_json(path: impl AsRef<Path>) -> Result<serde_json::Value> {
    read_json_as(path)
}

/// Read a file and decode it into a concrete deserializable type.
///
/// File problems propagate from [`crate::read_text`]; a decode failure is
/// [`Error::Parse`] wrapping the serde error.
pub fn read_json_as<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let text = read_text(&path)?;
    serde_json::from_str(&text).map_err(|e| Error::Parse {
        path: path.as_ref().to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[test]
    fn read_fixture_as_value() -> Result<()> {
        let value = read_json("fixture/json/input.json")?;
        assert_eq!(value["foo"], "bar");
        assert_eq!(value["muk"], "qux");
        Ok(())
    }

    #[test]
    fn read_fixture_as_typed() -> Result<()> {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Pair {
            foo: String,
            muk: String,
        }

        let pair: Pair = read_json_as("fixture/json/input.json")?;
        assert_eq!(
            pair,
            Pair {
                foo: "bar".into(),
                muk: "qux".into(),
            }
        );
        Ok(())
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let e = read_json(&path).unwrap_err();
        assert!(matches!(e, Error::Parse { .. }));
    }

    #[test]
    fn missing_file_propagates_not_found() {
        let e = read_json("fixture/json/no-such.json").unwrap_err();
        assert!(matches!(e, Error::NotFound { .. }));
    }
}
