//! The document ID set.

use std::collections::{BTreeSet, btree_set};

/// The set of document IDs available for sidebar references.
///
/// IDs are `/`-separated paths relative to the docs root with the file
/// extension stripped, e.g. `guides/cli-output-format`. Backed by a
/// `BTreeSet` so iteration order is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocCorpus {
    ids: BTreeSet<String>,
}

impl DocCorpus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from explicit IDs.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn insert(&mut self, id: impl Into<String>) {
        self.ids.insert(id.into());
    }

    /// Whether `id` names a known document.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// IDs in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> IntoIterator for &'a DocCorpus {
    type Item = &'a str;
    type IntoIter = std::iter::Map<btree_set::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter().map(String::as_str)
    }
}
