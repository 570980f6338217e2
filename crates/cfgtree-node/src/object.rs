//! Object nodes: named children keyed case-insensitively.
//!
//! Children are stored in an [`IndexMap`] keyed by [`NodeName`], so lookups
//! ignore case while enumeration follows insertion order. Equality and hashing
//! treat the children as a set of key/value pairs; order never matters.

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::error::{NodeError, NodeResult};
use crate::name::{name_hash, names_equal, NameRef, NodeName};
use crate::node::Node;

/// A settings node holding named children.
///
/// # Invariants
///
/// - Every child has a name, and it is the child's key (modulo case).
/// - Keys are unique ignoring case. A later child with a colliding name
///   replaces the earlier one in place.
#[derive(Clone, Debug, Default)]
pub struct ObjectNode {
    name: Option<String>,
    children: IndexMap<NodeName, Node>,
}

impl ObjectNode {
    /// Create an object node from its children.
    ///
    /// Fails with [`NodeError::NamelessChild`] if any child has no name.
    pub fn new(name: Option<String>, children: impl IntoIterator<Item = Node>) -> NodeResult<Self> {
        let mut map = IndexMap::new();
        for child in children {
            let key = NodeName::from(child.name().ok_or(NodeError::NamelessChild)?);
            insert_child(&mut map, key, child);
        }
        Ok(Self {
            name,
            children: map,
        })
    }

    /// An object with no children.
    pub fn empty(name: Option<String>) -> Self {
        Self {
            name,
            children: IndexMap::new(),
        }
    }

    /// Create an object node from explicit key/child pairs.
    ///
    /// A child whose name is absent or disagrees with its key is renamed to
    /// the key, so the result always satisfies the named-child invariant.
    pub fn from_entries<K>(
        name: Option<String>,
        entries: impl IntoIterator<Item = (K, Node)>,
    ) -> Self
    where
        K: Into<NodeName>,
    {
        let mut map = IndexMap::new();
        for (key, child) in entries {
            let key = key.into();
            let child = if names_equal(child.name(), Some(key.as_str())) {
                child
            } else {
                child.with_name(Some(key.as_str().to_string()))
            };
            insert_child(&mut map, key, child);
        }
        Self { name, children: map }
    }

    /// The builder has already checked names; keys are taken as given.
    pub(crate) fn from_map(name: Option<String>, children: IndexMap<NodeName, Node>) -> Self {
        Self { name, children }
    }

    pub(crate) fn map(&self) -> &IndexMap<NodeName, Node> {
        &self.children
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Case-insensitive child lookup.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.children.get(&NameRef::new(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(&NameRef::new(key))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children in insertion order.
    pub fn children(&self) -> indexmap::map::Values<'_, NodeName, Node> {
        self.children.values()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, NodeName, Node> {
        self.children.keys()
    }

    /// Key/child pairs in insertion order.
    pub fn entries(&self) -> indexmap::map::Iter<'_, NodeName, Node> {
        self.children.iter()
    }

    /// Returns `true` if both objects have the same key set, ignoring case and order.
    pub fn has_same_keys(&self, other: &ObjectNode) -> bool {
        self.len() == other.len() && self.keys().all(|key| other.children.contains_key(key))
    }

    /// A copy of this object under a different name. Children are shared.
    pub fn renamed(&self, name: Option<String>) -> Self {
        Self {
            name,
            children: self.children.clone(),
        }
    }

    /// Hash code consistent with [`PartialEq`]; independent of child order.
    pub fn hash_code(&self) -> u64 {
        let children = self.children.iter().fold(0u64, |acc, (key, child)| {
            let entry = name_hash(Some(key.as_str()))
                .wrapping_mul(31)
                .wrapping_add(child.hash_code());
            acc.wrapping_add(entry)
        });
        name_hash(self.name()).wrapping_mul(397) ^ children.wrapping_mul(599)
    }
}

fn insert_child(map: &mut IndexMap<NodeName, Node>, key: NodeName, child: Node) {
    match map.get_mut(&key) {
        Some(slot) => *slot = child,
        None => {
            map.insert(key, child);
        }
    }
}

impl PartialEq for ObjectNode {
    fn eq(&self, other: &Self) -> bool {
        names_equal(self.name(), other.name())
            && self.len() == other.len()
            && self
                .children
                .iter()
                .all(|(key, child)| other.children.get(key) == Some(child))
    }
}

impl Eq for ObjectNode {}

impl Hash for ObjectNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}
