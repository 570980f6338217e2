//! The settings node sum type.
//!
//! [`Node`] is a closed set of three variants. Each variant is held behind an
//! [`Arc`], so cloning a node never copies its subtree and identical subtrees
//! can be shared between trees. Nodes are immutable once constructed; every
//! transformation builds a new node.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::array::ArrayNode;
use crate::error::NodeResult;
use crate::name::NodeName;
use crate::object::ObjectNode;
use crate::value::ValueNode;

/// Variant tag of a [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Value,
    Object,
    Array,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Value => "value",
            Self::Object => "object",
            Self::Array => "array",
        };
        f.write_str(label)
    }
}

/// One element of a settings tree.
#[derive(Clone, Debug)]
pub enum Node {
    Value(Arc<ValueNode>),
    Object(Arc<ObjectNode>),
    Array(Arc<ArrayNode>),
}

impl Node {
    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    /// A named leaf.
    pub fn leaf(name: impl Into<String>, value: impl Into<String>) -> Self {
        ValueNode::new(Some(name.into()), Some(value.into())).into()
    }

    /// A nameless leaf, typically an array element.
    pub fn unnamed_leaf(value: impl Into<String>) -> Self {
        ValueNode::new(None, Some(value.into())).into()
    }

    /// A named leaf without a value.
    pub fn null_leaf(name: impl Into<String>) -> Self {
        ValueNode::new(Some(name.into()), None).into()
    }

    /// A named object. Fails if any child has no name.
    pub fn object(
        name: impl Into<String>,
        children: impl IntoIterator<Item = Node>,
    ) -> NodeResult<Self> {
        Ok(ObjectNode::new(Some(name.into()), children)?.into())
    }

    /// A nameless object. Fails if any child has no name.
    pub fn unnamed_object(children: impl IntoIterator<Item = Node>) -> NodeResult<Self> {
        Ok(ObjectNode::new(None, children)?.into())
    }

    /// A named object of string leaves.
    ///
    /// Every child is named by its key, so this cannot fail.
    pub fn object_from_pairs<K, V>(
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut children = indexmap::IndexMap::new();
        for (key, value) in pairs {
            let key: String = key.into();
            let child = Node::leaf(key.clone(), value);
            children.insert(NodeName::from(key), child);
        }
        ObjectNode::from_map(Some(name.into()), children).into()
    }

    pub fn empty_object(name: Option<String>) -> Self {
        ObjectNode::empty(name).into()
    }

    /// A named array.
    pub fn array(name: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        ArrayNode::new(Some(name.into()), children).into()
    }

    /// A nameless array.
    pub fn unnamed_array(children: impl IntoIterator<Item = Node>) -> Self {
        ArrayNode::new(None, children).into()
    }

    pub fn empty_array(name: Option<String>) -> Self {
        ArrayNode::empty(name).into()
    }

    /// A shallow copy of this node under another name. Children are shared.
    pub fn with_name(&self, name: Option<String>) -> Self {
        match self {
            Self::Value(node) => node.renamed(name).into(),
            Self::Object(node) => node.renamed(name).into(),
            Self::Array(node) => node.renamed(name).into(),
        }
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Value(_) => NodeKind::Value,
            Self::Object(_) => NodeKind::Object,
            Self::Array(_) => NodeKind::Array,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Value(node) => node.name(),
            Self::Object(node) => node.name(),
            Self::Array(node) => node.name(),
        }
    }

    /// The leaf value. Always `None` for objects and arrays.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Value(node) => node.value(),
            Self::Object(_) | Self::Array(_) => None,
        }
    }

    /// Case-insensitive lookup of an object child. `None` for other variants.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Self::Object(node) => node.get(key),
            Self::Value(_) | Self::Array(_) => None,
        }
    }

    /// Direct children: none for values, in order for arrays, in insertion
    /// order for objects.
    pub fn children(&self) -> Children<'_> {
        match self {
            Self::Value(_) => Children::Empty,
            Self::Object(node) => Children::Object(node.children()),
            Self::Array(node) => Children::Array(node.children()),
        }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        match self {
            Self::Value(_) => 0,
            Self::Object(node) => node.len(),
            Self::Array(node) => node.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn as_value(&self) -> Option<&ValueNode> {
        match self {
            Self::Value(node) => Some(node.as_ref()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectNode> {
        match self {
            Self::Object(node) => Some(node.as_ref()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayNode> {
        match self {
            Self::Array(node) => Some(node.as_ref()),
            _ => None,
        }
    }

    /// Returns `true` if both handles point at the same node instance.
    pub fn same_instance(a: &Node, b: &Node) -> bool {
        match (a, b) {
            (Self::Value(a), Self::Value(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Structural hash code, consistent with [`PartialEq`].
    pub fn hash_code(&self) -> u64 {
        match self {
            Self::Value(node) => node.hash_code(),
            Self::Object(node) => node.hash_code(),
            Self::Array(node) => node.hash_code(),
        }
    }
}

impl From<ValueNode> for Node {
    fn from(node: ValueNode) -> Self {
        Self::Value(Arc::new(node))
    }
}

impl From<ObjectNode> for Node {
    fn from(node: ObjectNode) -> Self {
        Self::Object(Arc::new(node))
    }
}

impl From<ArrayNode> for Node {
    fn from(node: ArrayNode) -> Self {
        Self::Array(Arc::new(node))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        if Self::same_instance(self, other) {
            return true;
        }
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

/// Iterator over the direct children of a [`Node`].
#[derive(Clone, Debug)]
pub enum Children<'a> {
    Empty,
    Object(indexmap::map::Values<'a, NodeName, Node>),
    Array(std::slice::Iter<'a, Node>),
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Empty => None,
            Self::Object(iter) => iter.next(),
            Self::Array(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Empty => (0, Some(0)),
            Self::Object(iter) => iter.size_hint(),
            Self::Array(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Children<'_> {}
