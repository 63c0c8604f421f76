use crate::language::{CUSTOM, LanguageKey};
use crate::namespace::Namespace;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The message store.
///
/// `I18n` keeps only the resolved string of a [`LanguageKey`]: a key is
/// lowercased under the bound `standard` on every push and lookup. Changing
/// the standard later does not re-key what is already stored, so a store
/// should keep one standard for its whole life.
///
/// Mutation takes `&mut self` and there is no internal locking. Populate the
/// store at startup, then share it read-only (or behind a caller-owned lock).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18n {
    #[serde(default, deserialize_with = "crate::codec::null_as_default")]
    values: Namespace,
    #[serde(default)]
    default_language: Option<LanguageKey>,
    #[serde(default = "default_standard")]
    standard: String,
}

fn default_standard() -> String {
    CUSTOM.to_string()
}

impl Default for I18n {
    fn default() -> Self {
        I18n::new(CUSTOM)
    }
}

impl I18n {
    /// Create an empty store bound to `standard` (`Custom` when empty).
    pub fn new(standard: &str) -> Self {
        let standard = if standard.is_empty() {
            default_standard()
        } else {
            standard.to_string()
        };
        I18n {
            values: Namespace::new(),
            default_language: None,
            standard,
        }
    }

    pub fn standard(&self) -> &str {
        &self.standard
    }

    /// Only affects later resolutions; stored messages keep their keys.
    pub fn set_standard(&mut self, standard: &str) -> &mut Self {
        self.standard = standard.to_string();
        self
    }

    /// Reserved; lookups do not fall back to it.
    pub fn default_language(&self) -> Option<&LanguageKey> {
        self.default_language.as_ref()
    }

    pub fn set_default_language(&mut self, language: LanguageKey) -> &mut Self {
        self.default_language = Some(language);
        self
    }

    /// The string a key is stored under in this store.
    pub fn language_string(&self, language: &LanguageKey) -> String {
        language.lower(&self.standard)
    }

    /// Push `text` for `language` at `scopes`.
    ///
    /// `push_message(&english, "test", &["namespace", "code"])` stores one
    /// message two scopes deep. An existing value is overwritten, empty `text`
    /// deletes it, and an empty `scopes` is ignored.
    pub fn push_message<S: AsRef<str>>(
        &mut self,
        language: &LanguageKey,
        text: &str,
        scopes: &[S],
    ) {
        let language = self.language_string(language);
        self.push_message_by_string(&language, text, scopes);
    }

    /// Like [`I18n::push_message`] with an already resolved language string.
    pub fn push_message_by_string<S: AsRef<str>>(
        &mut self,
        language: &str,
        text: &str,
        scopes: &[S],
    ) {
        self.values.push_message(language, text, scopes);
    }

    /// The message for `language` at exactly `scopes`, or `None`.
    pub fn message<S: AsRef<str>>(&self, language: &LanguageKey, scopes: &[S]) -> Option<&str> {
        self.message_by_string(&self.language_string(language), scopes)
    }

    pub fn message_by_string<S: AsRef<str>>(&self, language: &str, scopes: &[S]) -> Option<&str> {
        self.values.message(language, scopes)
    }

    /// Read-only view of everything stored under `scopes`.
    pub fn subtree<S: AsRef<str>>(&self, scopes: &[S]) -> Option<&Namespace> {
        self.values.node(scopes)
    }

    pub fn root(&self) -> &Namespace {
        &self.values
    }

    pub fn walk_records<F>(&self, visit: F)
    where
        F: FnMut(&str, &str, &[String]),
    {
        self.values.walk_records(visit);
    }

    pub fn walk_messages<F>(&self, visit: F)
    where
        F: FnMut(&BTreeMap<String, String>, &[String]),
    {
        self.values.walk_messages(visit);
    }

    pub fn record_count(&self) -> usize {
        self.values.record_count()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }

    /// A builder bound to `scopes` for registering several languages at once.
    ///
    /// ```
    /// use scoped_i18n::{I18n, LanguageRegistry, ISO_639_1};
    ///
    /// let registry = LanguageRegistry::builtin();
    /// let mut i18n = I18n::new(ISO_639_1);
    /// i18n.pusher(&["user", "text", "test"])
    ///     .push(registry.english(), "test")
    ///     .push(registry.chinese(), "测试");
    /// assert_eq!(i18n.message_by_string("zh", &["user", "text", "test"]), Some("测试"));
    /// ```
    pub fn pusher<S: AsRef<str>>(&mut self, scopes: &[S]) -> Pusher<'_> {
        Pusher {
            store: self,
            scopes: scopes.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

/// A scope path bound to a store; see [`I18n::pusher`].
#[derive(Debug)]
pub struct Pusher<'a> {
    store: &'a mut I18n,
    scopes: Vec<String>,
}

impl Pusher<'_> {
    pub fn push(&mut self, language: &LanguageKey, text: &str) -> &mut Self {
        self.store.push_message(language, text, self.scopes.as_slice());
        self
    }

    pub fn push_str(&mut self, language: &str, text: &str) -> &mut Self {
        self.store
            .push_message_by_string(language, text, self.scopes.as_slice());
        self
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }
}
