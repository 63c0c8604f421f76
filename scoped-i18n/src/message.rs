use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Whether writing `text` removes the entry instead of storing it.
///
/// An empty message and a missing message are the same thing in this store.
pub fn is_deletion(text: &str) -> bool {
    text.is_empty()
}

/// The leaf of a scope node: resolved language string to message text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(
        rename = "message_value",
        default,
        deserialize_with = "deserialize_non_empty"
    )]
    values: BTreeMap<String, String>,
}

impl Message {
    pub fn new() -> Self {
        Message::default()
    }

    pub fn message(&self, language: &str) -> Option<&str> {
        self.values.get(language).map(String::as_str)
    }

    /// Store `text` for `language`, or drop the entry when `text` is empty.
    pub fn push_message(&mut self, language: &str, text: &str) {
        if is_deletion(text) {
            self.values.remove(language);
        } else {
            self.values.insert(language.to_string(), text.to_string());
        }
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// Imported documents may carry empty strings or a null map; both mean "absent".
fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut values = Option::<BTreeMap<String, String>>::deserialize(deserializer)?
        .unwrap_or_default();
    values.retain(|_, text| !is_deletion(text));
    Ok(values)
}
