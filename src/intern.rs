//! Shared storage for element names.
//!
//! Markup repeats a small set of tag names many times. Interning them means
//! every `<p>` in a document (or in every document parsed through the same
//! interner) points at one allocation.

use parking_lot::RwLock;
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// An element name backed by a shared allocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InternedName(Arc<str>);

impl InternedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when both names share the same allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for InternedName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for InternedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InternedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for InternedName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for InternedName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

#[derive(Debug)]
pub struct NameInterner {
    names: RwLock<HashSet<Arc<str>>>,
}

impl Default for NameInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl NameInterner {
    pub fn new() -> Self {
        Self {
            names: RwLock::new(HashSet::new()),
        }
    }

    pub fn intern(&self, name: &str) -> InternedName {
        if let Some(interned) = self.names.read().get(name) {
            return InternedName(Arc::clone(interned));
        }

        let mut write_guard = self.names.write();
        // Another writer may have inserted it between the two locks
        if let Some(interned) = write_guard.get(name) {
            return InternedName(Arc::clone(interned));
        }
        let interned: Arc<str> = Arc::from(name);
        let _ = write_guard.insert(Arc::clone(&interned));
        InternedName(interned)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.read().is_empty()
    }
}
