//! A hierarchical, scoped message store.
//!
//! Messages live in a trie keyed by scope labels (`["system", "text", "error"]`)
//! and, at each node, by language string. Languages are described by
//! [`LanguageKey`]s, which can be spelled under several naming standards;
//! the store resolves them through one bound standard.
//!
//! ```
//! use scoped_i18n::{I18n, LanguageRegistry, ISO_639_1};
//!
//! let registry = LanguageRegistry::builtin();
//! let mut i18n = I18n::new(ISO_639_1);
//! i18n.pusher(&["system", "text", "error"])
//!     .push(registry.english(), "error occurred")
//!     .push(registry.chinese(), "错误");
//!
//! assert_eq!(
//!     i18n.message(registry.english(), &["system", "text", "error"]),
//!     Some("error occurred")
//! );
//! assert_eq!(i18n.message(registry.english(), &["system", "text"]), None);
//! ```

pub mod codec;
pub mod error;
pub mod language;
pub mod loader;
pub mod merge;
pub mod message;
pub mod namespace;
pub mod registry;
pub mod store;

// Re-export the main types for convenient access
pub use codec::{from_json, read_json_file, to_json, to_json_pretty, write_json_file};
pub use error::{I18nError, Result};
pub use language::{
    CUSTOM, ISO_639_1, ISO_639_2B, ISO_639_2T, ISO_639_3, LanguageKey, STANDARDS,
};
pub use loader::{load_from_file, load_from_paths};
pub use message::{Message, is_deletion};
pub use namespace::Namespace;
pub use registry::LanguageRegistry;
pub use store::{I18n, Pusher};
