//! The scope trie.
//!
//! Every node is addressed by the labels on the way down from the root, e.g.
//! `["system", "text", "error"]`. A node carries its own [`Message`] leaf and
//! any number of children. Paths must have at least one label: the root leaf
//! is never written through the public operations.

use crate::message::Message;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::ControlFlow;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    #[serde(default, deserialize_with = "crate::codec::null_as_default")]
    children: BTreeMap<String, Namespace>,
    #[serde(default, deserialize_with = "crate::codec::null_as_default")]
    messages: Message,
}

impl Namespace {
    pub fn new() -> Self {
        Namespace::default()
    }

    /// Set (or delete, for empty `text`) the `language` entry at `scopes`.
    ///
    /// Intermediate nodes are created on the way down. An empty `scopes` is
    /// dropped: every message belongs to at least one scope.
    pub fn push_message<S: AsRef<str>>(&mut self, language: &str, text: &str, scopes: &[S]) {
        if scopes.is_empty() {
            tracing::trace!(language, "dropping message pushed without a scope");
            return;
        }
        self.push_below(language, text, scopes);
    }

    fn push_below<S: AsRef<str>>(&mut self, language: &str, text: &str, scopes: &[S]) {
        match scopes.split_first() {
            None => self.messages.push_message(language, text),
            Some((head, rest)) => self
                .children
                .entry(head.as_ref().to_string())
                .or_default()
                .push_below(language, text, rest),
        }
    }

    /// Look up the `language` entry stored exactly at `scopes`.
    pub fn message<S: AsRef<str>>(&self, language: &str, scopes: &[S]) -> Option<&str> {
        self.node(scopes)?.messages.message(language)
    }

    /// The node at `scopes`, if that path has been created.
    pub fn node<S: AsRef<str>>(&self, scopes: &[S]) -> Option<&Namespace> {
        if scopes.is_empty() {
            return None;
        }
        scopes
            .iter()
            .try_fold(self, |node, label| node.children.get(label.as_ref()))
    }

    pub fn messages(&self) -> &Message {
        &self.messages
    }

    pub fn children(&self) -> &BTreeMap<String, Namespace> {
        &self.children
    }

    /// Pre-order walk over every node, root first, siblings in label order.
    ///
    /// `visit` receives the node's leaf values (possibly empty) and the path
    /// from the root.
    pub fn walk_messages<F>(&self, mut visit: F)
    where
        F: FnMut(&BTreeMap<String, String>, &[String]),
    {
        let _ = self.try_walk_messages(|values, path| {
            visit(values, path);
            ControlFlow::<()>::Continue(())
        });
    }

    /// Like [`Namespace::walk_messages`], stopping at the first `Break`.
    pub fn try_walk_messages<B, F>(&self, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(&BTreeMap<String, String>, &[String]) -> ControlFlow<B>,
    {
        let mut path = Vec::new();
        self.walk_inner(&mut path, &mut visit)
    }

    fn walk_inner<B, F>(&self, path: &mut Vec<String>, visit: &mut F) -> ControlFlow<B>
    where
        F: FnMut(&BTreeMap<String, String>, &[String]) -> ControlFlow<B>,
    {
        visit(self.messages.values(), path.as_slice())?;
        for (label, child) in &self.children {
            path.push(label.clone());
            let flow = child.walk_inner(path, visit);
            path.pop();
            flow?;
        }
        ControlFlow::Continue(())
    }

    /// Visit each `(language, text, path)` record in the trie.
    pub fn walk_records<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &str, &[String]),
    {
        let _ = self.try_walk_records(|language, text, path| {
            visit(language, text, path);
            ControlFlow::<()>::Continue(())
        });
    }

    pub fn try_walk_records<B, F>(&self, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(&str, &str, &[String]) -> ControlFlow<B>,
    {
        self.try_walk_messages(|values, path| {
            for (language, text) in values {
                visit(language, text, path)?;
            }
            ControlFlow::Continue(())
        })
    }

    pub fn record_count(&self) -> usize {
        self.messages.len()
            + self
                .children
                .values()
                .map(Namespace::record_count)
                .sum::<usize>()
    }
}
