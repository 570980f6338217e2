use std::hash::{Hash, Hasher};

use crate::name::{name_hash, names_equal};
use crate::node::Node;

/// A settings node holding an ordered sequence of children.
///
/// Children need not be named. Equality compares them position by position.
#[derive(Clone, Debug, Default)]
pub struct ArrayNode {
    name: Option<String>,
    children: Vec<Node>,
}

impl ArrayNode {
    pub fn new(name: Option<String>, children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            name,
            children: children.into_iter().collect(),
        }
    }

    pub fn empty(name: Option<String>) -> Self {
        Self {
            name,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Child at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.children
    }

    /// A copy of this array under a different name. Children are shared.
    pub fn renamed(&self, name: Option<String>) -> Self {
        Self {
            name,
            children: self.children.clone(),
        }
    }

    /// Hash code consistent with [`PartialEq`]; depends on child order.
    pub fn hash_code(&self) -> u64 {
        let children = self
            .children
            .iter()
            .fold(17u64, |acc, child| acc.wrapping_mul(31).wrapping_add(child.hash_code()));
        name_hash(self.name()).wrapping_mul(397) ^ children
    }
}

impl PartialEq for ArrayNode {
    fn eq(&self, other: &Self) -> bool {
        names_equal(self.name(), other.name()) && self.children == other.children
    }
}

impl Eq for ArrayNode {}

impl Hash for ArrayNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}
