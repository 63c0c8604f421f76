use crate::codec::read_json_file;
use crate::error::Result;
use crate::store::I18n;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Build a store from message files and directories.
///
/// Each path is either a JSON store file (see [`crate::codec`]) or a directory
/// that is searched recursively for `*.json` files. Every file found is
/// [`I18n::cover`]ed into the result in order, so when two files define the
/// same message the later one wins. Within a directory, files are visited in
/// file-name order.
///
/// # Arguments
/// * `standard` - Standard bound to the returned store
/// * `paths` - Files and directories, in increasing priority
///
/// # Errors
/// - File read errors
/// - Invalid JSON
///
/// Paths that do not exist are skipped with a warning.
pub fn load_from_paths<P: AsRef<Path>>(standard: &str, paths: &[P]) -> Result<I18n> {
    let mut i18n = I18n::new(standard);

    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "message path not found, skipping");
            continue;
        }

        for file in message_files(path) {
            let messages = read_json_file(&file)?;
            tracing::debug!(
                path = %file.display(),
                records = messages.record_count(),
                "loaded message file"
            );
            i18n.cover(&messages);
        }
    }

    Ok(i18n)
}

/// Load a single JSON store file, keeping the standard recorded in it.
pub fn load_from_file(path: &Path) -> Result<I18n> {
    read_json_file(path)
}

/// `*.json` files at or below `path`, in a stable order.
fn message_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return if is_message_file(path) {
            vec![path.to_path_buf()]
        } else {
            Vec::new()
        };
    }

    WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("error walking message directory: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_message_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

fn is_message_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
