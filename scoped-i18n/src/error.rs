use std::path::PathBuf;

/// Errors raised by the codec and the file loader.
///
/// Lookups never fail: a missing scope or language is reported as `None`.
/// Only corrupt or unreadable external state surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// Reading or writing a file failed
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Malformed JSON in an in-memory document
    #[error("invalid message store JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
    /// Malformed JSON in a file
    #[error("invalid message store JSON in '{}': {source}", path.display())]
    JsonFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for I18nError {
    fn from(source: serde_json::Error) -> Self {
        I18nError::Json { source }
    }
}

/// Result type for codec and loader operations
pub type Result<T> = std::result::Result<T, I18nError>;
