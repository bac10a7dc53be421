//! The set of tracked source files.

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::value_objects::SourceFileName;

/// Known source files, unique by name.
///
/// Iteration is sorted by name. The manifest renders in this order, so two
/// sessions that see the same files produce the same import list regardless of
/// the order notifications arrived in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSet {
    names: BTreeSet<SourceFileName>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name. Returns `true` if it was not already present.
    pub fn insert(&mut self, name: SourceFileName) -> bool {
        self.names.insert(name)
    }

    /// Remove a name. Returns `true` if it was present.
    pub fn remove(&mut self, name: &SourceFileName) -> bool {
        self.names.remove(name)
    }

    pub fn contains(&self, name: &SourceFileName) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceFileName> {
        self.names.iter()
    }

    /// Names as plain strings, in render order.
    pub fn to_strings(&self) -> Vec<String> {
        self.names.iter().map(|n| n.as_str().to_string()).collect()
    }
}

impl FromIterator<SourceFileName> for SourceSet {
    fn from_iter<T: IntoIterator<Item = SourceFileName>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SourceSet {
    type Item = &'a SourceFileName;
    type IntoIter = std::collections::btree_set::Iter<'a, SourceFileName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// SourceSet shared between the intake thread (writer) and the rebuild
/// pipeline (reader).
#[derive(Debug, Clone, Default)]
pub struct SharedSourceSet {
    inner: Arc<RwLock<SourceSet>>,
}

impl SharedSourceSet {
    pub fn new(initial: SourceSet) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Copy of the current set, taken when a work unit starts.
    pub fn snapshot(&self) -> SourceSet {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run `f` with exclusive access to the set.
    pub fn update<R>(&self, f: impl FnOnce(&mut SourceSet) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
