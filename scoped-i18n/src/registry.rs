//! Built-in languages.
//!
//! The registry is immutable once built. Construct it with
//! [`LanguageRegistry::builtin`] and pass it around, or borrow the
//! process-wide instance from [`LanguageRegistry::shared`].

use crate::language::{CUSTOM, ISO_639_1, ISO_639_2B, ISO_639_2T, ISO_639_3, LanguageKey};
use std::collections::BTreeMap;
use std::sync::OnceLock;

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

/// Spellings of a built-in language, one per standard.
struct LanguageSpec {
    custom: &'static str,
    iso_639_1: &'static str,
    iso_639_2b: &'static str,
    iso_639_2t: &'static str,
    iso_639_3: &'static str,
}

const BUILTIN: [LanguageSpec; 3] = [
    LanguageSpec {
        custom: "chinese",
        iso_639_1: "zh",
        iso_639_2b: "chi",
        iso_639_2t: "zho",
        iso_639_3: "zho",
    },
    LanguageSpec {
        custom: "english",
        iso_639_1: "en",
        iso_639_2b: "eng",
        iso_639_2t: "eng",
        iso_639_3: "eng",
    },
    LanguageSpec {
        custom: "japanese",
        iso_639_1: "ja",
        iso_639_2b: "jpn",
        iso_639_2t: "jpn",
        iso_639_3: "jpn",
    },
];

impl LanguageSpec {
    fn to_key(&self) -> LanguageKey {
        let mut key = LanguageKey::new();
        key.push(CUSTOM, self.custom)
            .push(ISO_639_1, self.iso_639_1)
            .push(ISO_639_2B, self.iso_639_2b)
            .push(ISO_639_2T, self.iso_639_2t)
            .push(ISO_639_3, self.iso_639_3);
        key
    }
}

/// Languages addressable by name (`"english"`) or by any of their codes.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: BTreeMap<String, LanguageKey>,
    none: LanguageKey,
}

impl LanguageRegistry {
    pub fn builtin() -> Self {
        let languages = BUILTIN
            .iter()
            .map(|spec| (spec.custom.to_string(), spec.to_key()))
            .collect();
        LanguageRegistry {
            languages,
            none: none_language(),
        }
    }

    /// The process-wide built-in registry, built on first use.
    pub fn shared() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(LanguageRegistry::builtin)
    }

    /// Look a language up by its registry name.
    pub fn get(&self, name: &str) -> Option<&LanguageKey> {
        self.languages.get(&name.to_lowercase())
    }

    /// Look a language up by name first, then by any recorded code.
    pub fn find(&self, identifier: &str) -> Option<&LanguageKey> {
        self.get(identifier).or_else(|| {
            self.languages
                .values()
                .find(|language| language.matches(identifier))
        })
    }

    /// Like [`LanguageRegistry::find`], answering the "none" language on a miss.
    pub fn find_or_none(&self, identifier: &str) -> &LanguageKey {
        self.find(identifier).unwrap_or(&self.none)
    }

    /// The placeholder language: `"none"` under ISO 639-1 and, by fallback,
    /// under every other standard.
    pub fn none(&self) -> &LanguageKey {
        &self.none
    }

    pub fn languages(&self) -> &BTreeMap<String, LanguageKey> {
        &self.languages
    }

    pub fn english(&self) -> &LanguageKey {
        &self.languages["english"]
    }

    pub fn chinese(&self) -> &LanguageKey {
        &self.languages["chinese"]
    }

    pub fn japanese(&self) -> &LanguageKey {
        &self.languages["japanese"]
    }
}

fn none_language() -> LanguageKey {
    let mut key = LanguageKey::new();
    key.with_default_standard(ISO_639_1).push(ISO_639_1, "none");
    key
}
