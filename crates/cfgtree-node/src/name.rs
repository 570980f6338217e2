//! Case-insensitive node names.
//!
//! Object keys, node names and settings paths all compare names the same way:
//! by Unicode case folding, independent of locale. [`NodeName`] is the owned
//! key type used inside object nodes; [`NameRef`] is its borrowed lookup form.
//! Both hash the folded form, so a lookup with any casing lands on the same
//! slot.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use unicase::UniCase;

/// An owned node name with case-insensitive equality, ordering and hashing.
#[derive(Clone)]
pub struct NodeName(String);

impl NodeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    fn folded(&self) -> UniCase<&str> {
        UniCase::unicode(self.0.as_str())
    }
}

impl PartialEq for NodeName {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl Eq for NodeName {}

impl PartialOrd for NodeName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NodeName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(&other.folded())
    }
}

impl Hash for NodeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

impl fmt::Debug for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeName({:?})", self.0)
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for NodeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Borrowed lookup key for maps keyed by [`NodeName`].
///
/// Hashes identically to a `NodeName` with the same folded spelling, which
/// lets object lookups by `&str` skip allocating an owned key.
#[derive(Clone, Copy, Debug)]
pub struct NameRef<'a>(&'a str);

impl<'a> NameRef<'a> {
    pub fn new(name: &'a str) -> Self {
        Self(name)
    }
}

impl Hash for NameRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        UniCase::unicode(self.0).hash(state);
    }
}

impl indexmap::Equivalent<NodeName> for NameRef<'_> {
    fn equivalent(&self, key: &NodeName) -> bool {
        names_equal(Some(self.0), Some(key.as_str()))
    }
}

/// Case-insensitive comparison of two optional names. Two absent names are equal.
pub fn names_equal(left: Option<&str>, right: Option<&str>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => UniCase::unicode(l) == UniCase::unicode(r),
        (None, None) => true,
        _ => false,
    }
}

/// Case-insensitive ordering of two names.
pub fn compare_names(left: &str, right: &str) -> Ordering {
    UniCase::unicode(left).cmp(&UniCase::unicode(right))
}

/// Hash of a name that ignores case. An absent name hashes to zero.
pub fn name_hash(name: Option<&str>) -> u64 {
    match name {
        Some(name) => {
            let mut hasher = DefaultHasher::new();
            UniCase::unicode(name).hash(&mut hasher);
            hasher.finish()
        }
        None => 0,
    }
}

/// Case-sensitive hash of a leaf value. An absent value hashes to zero.
pub fn value_hash(value: Option<&str>) -> u64 {
    match value {
        Some(value) => {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }
        None => 0,
    }
}
