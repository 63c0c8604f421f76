//! Combining and comparing whole stores.
//!
//! All three operations work on records, the `(path, language, text)`
//! triples produced by [`I18n::walk_records`]. Trie shape is not compared:
//! an empty node in one store and no node at all in the other are equal.

use crate::store::I18n;
use std::ops::ControlFlow;

impl I18n {
    /// Merge `other` into `self`, with `other` winning every conflict.
    ///
    /// Records that only exist in `self` are left untouched.
    pub fn cover(&mut self, other: &I18n) -> &mut Self {
        other.walk_records(|language, text, scopes| {
            self.push_message_by_string(language, text, scopes);
        });
        self
    }

    /// True when every record of `self` is also in `other` with the same text.
    pub fn is_subset_of(&self, other: &I18n) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        let mismatch = self.root().try_walk_records(|language, text, scopes| {
            match other.message_by_string(language, scopes) {
                Some(found) if found == text => ControlFlow::Continue(()),
                _ => ControlFlow::Break(()),
            }
        });
        mismatch.is_continue()
    }

    /// True when both stores hold exactly the same records.
    pub fn is_equal_to(&self, other: &I18n) -> bool {
        std::ptr::eq(self, other) || (self.is_subset_of(other) && other.is_subset_of(self))
    }
}

/// [`I18n::is_subset_of`] for stores that may not exist.
///
/// Two missing stores are subsets of each other; a missing store and a present
/// one never are, in either direction.
pub fn subset(a: Option<&I18n>, b: Option<&I18n>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.is_subset_of(b),
        _ => false,
    }
}

/// [`I18n::is_equal_to`] for stores that may not exist.
pub fn equal(a: Option<&I18n>, b: Option<&I18n>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.is_equal_to(b),
        _ => false,
    }
}

/// Compares message records only; the bound standard is ignored.
impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }
}

impl Eq for I18n {}
