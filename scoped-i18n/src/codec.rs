//! JSON form of a whole store.
//!
//! The document keeps the full trie, empty intermediate nodes included:
//!
//! ```json
//! {
//!     "values": {
//!         "children": {
//!             "system": { "children": { ... }, "messages": { "message_value": {} } }
//!         },
//!         "messages": { "message_value": {} }
//!     },
//!     "default_language": null,
//!     "standard": "ISO 639-1"
//! }
//! ```

use crate::error::{I18nError, Result};
use crate::store::I18n;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// Read an explicit `null` the same as a missing field.
///
/// Documents written by other tools spell empty maps and absent nodes as
/// `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn to_json(i18n: &I18n) -> Result<String> {
    Ok(serde_json::to_string(i18n)?)
}

pub fn to_json_pretty(i18n: &I18n) -> Result<String> {
    Ok(serde_json::to_string_pretty(i18n)?)
}

/// Parse a store. Empty message texts in the document are dropped.
pub fn from_json(value: &str) -> Result<I18n> {
    Ok(serde_json::from_str(value)?)
}

/// Write `i18n` to `path` as pretty-printed JSON.
pub fn write_json_file(path: &Path, i18n: &I18n) -> Result<()> {
    let json = to_json_pretty(i18n)?;
    fs::write(path, json).map_err(|source| I18nError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = i18n.record_count(), "wrote message store");
    Ok(())
}

pub fn read_json_file(path: &Path) -> Result<I18n> {
    let content = fs::read_to_string(path).map_err(|source| I18nError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let i18n: I18n = serde_json::from_str(&content).map_err(|source| I18nError::JsonFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = i18n.record_count(), "read message store");
    Ok(i18n)
}
