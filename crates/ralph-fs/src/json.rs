//! JSON document persistence
//!
//! Pretty-printed serialization on save, path-annotated parse errors on load.

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// Load and deserialize a JSON document.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = io::read_text(path)?;
    serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        format: "JSON".into(),
        message: e.to_string(),
    })
}

/// Serialize a value as pretty JSON and write it atomically.
///
/// The document always ends with a trailing newline.
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
        path: path.to_path_buf(),
        format: "JSON".into(),
        message: e.to_string(),
    })?;
    content.push('\n');
    io::write_atomic(path, content.as_bytes())
}
