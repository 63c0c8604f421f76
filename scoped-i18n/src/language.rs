//! Language identity across naming standards.
//!
//! A [`LanguageKey`] describes one language (say, Chinese) and records how that
//! language is spelled under each naming standard: `"zh"` in ISO 639-1, `"chi"`
//! in ISO 639-2/B, `"zho"` in ISO 639-2/T and so on. The store binds a single
//! standard and resolves every key through it before touching the trie.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form names such as `"english"`. Also the fallback standard of a store.
pub const CUSTOM: &str = "Custom";
/// <https://en.wikipedia.org/wiki/List_of_ISO_639-1_codes>
pub const ISO_639_1: &str = "ISO 639-1";
/// Bibliographic ISO 639-2 codes
pub const ISO_639_2B: &str = "ISO 639-2 B";
/// Terminological ISO 639-2 codes
pub const ISO_639_2T: &str = "ISO 639-2 T";
pub const ISO_639_3: &str = "ISO 639-3";

/// Every standard known to the built-in registry.
pub const STANDARDS: [&str; 5] = [CUSTOM, ISO_639_1, ISO_639_2B, ISO_639_2T, ISO_639_3];

/// A language addressable under several naming standards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_standard: Option<String>,
    #[serde(
        rename = "Keys",
        alias = "variants",
        default,
        deserialize_with = "crate::codec::null_as_default"
    )]
    variants: BTreeMap<String, String>,
}

impl LanguageKey {
    pub fn new() -> Self {
        LanguageKey::default()
    }

    /// Set the standard consulted when a requested standard has no variant.
    pub fn with_default_standard(&mut self, standard: &str) -> &mut Self {
        self.default_standard = Some(standard.to_string());
        self
    }

    pub fn default_standard(&self) -> Option<&str> {
        self.default_standard.as_deref()
    }

    /// Record (or overwrite) the spelling of this language under `standard`.
    pub fn push(&mut self, standard: &str, value: &str) -> &mut Self {
        self.variants.insert(standard.to_string(), value.to_string());
        self
    }

    pub fn variants(&self) -> &BTreeMap<String, String> {
        &self.variants
    }

    /// Resolve under `standard`, falling back to the default standard once.
    ///
    /// Returns `None` when neither standard has a variant. This is the explicit
    /// form of [`LanguageKey::resolve`].
    pub fn try_resolve(&self, standard: &str) -> Option<&str> {
        if let Some(value) = self.variants.get(standard) {
            return Some(value);
        }
        match self.default_standard.as_deref() {
            Some(fallback) if !fallback.is_empty() && fallback != standard => {
                self.try_resolve(fallback)
            }
            _ => None,
        }
    }

    /// Resolve under `standard`; an unresolvable key yields the empty string.
    pub fn resolve(&self, standard: &str) -> String {
        self.try_resolve(standard).unwrap_or_default().to_string()
    }

    /// Whether `standard` (or its fallback) names this language at all.
    pub fn is_resolvable(&self, standard: &str) -> bool {
        self.try_resolve(standard).is_some()
    }

    pub fn upper(&self, standard: &str) -> String {
        self.resolve(standard).to_uppercase()
    }

    /// The form used as a store key: resolved and lowercased.
    pub fn lower(&self, standard: &str) -> String {
        self.resolve(standard).to_lowercase()
    }

    /// True when any recorded variant equals `identifier`, ignoring ASCII case.
    pub fn matches(&self, identifier: &str) -> bool {
        self.variants
            .values()
            .any(|value| value.eq_ignore_ascii_case(identifier))
    }
}
