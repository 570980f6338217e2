//! One-shot mutable staging area for object nodes.
//!
//! An [`ObjectNodeBuilder`] collects children, then [`build`] freezes it.
//! After the first build every mutation fails with [`NodeError::AlreadyBuilt`];
//! building again is allowed and produces a fresh, equal node.
//!
//! [`build`]: ObjectNodeBuilder::build

use indexmap::IndexMap;

use crate::error::{NodeError, NodeResult};
use crate::name::{NameRef, NodeName};
use crate::node::Node;
use crate::object::ObjectNode;

/// Lifecycle of an [`ObjectNodeBuilder`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuilderState {
    #[default]
    Building,
    Built,
}

/// Incrementally assembles an [`ObjectNode`].
///
/// Not meant to be shared between threads: every mutation takes `&mut self`.
#[derive(Clone, Debug, Default)]
pub struct ObjectNodeBuilder {
    name: Option<String>,
    children: IndexMap<NodeName, Node>,
    state: BuilderState,
}

impl ObjectNodeBuilder {
    /// An empty, nameless builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty builder with the given name.
    pub fn with_name(name: Option<String>) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// A builder seeded with the name and children of an existing object.
    ///
    /// The seed is never affected by later mutations.
    pub fn from_node(node: &ObjectNode) -> Self {
        Self {
            name: node.name().map(str::to_string),
            children: node.map().clone(),
            state: BuilderState::Building,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) -> NodeResult<()> {
        self.ensure_not_built()?;
        self.name = name;
        Ok(())
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.children.get(&NameRef::new(key))
    }

    pub fn children(&self) -> indexmap::map::Values<'_, NodeName, Node> {
        self.children.values()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Add or replace the child with the same (case-insensitive) name.
    pub fn set_child(&mut self, child: Node) -> NodeResult<()> {
        let key = NodeName::from(child.name().ok_or(NodeError::NamelessChild)?);
        self.ensure_not_built()?;
        match self.children.get_mut(&key) {
            Some(slot) => *slot = child,
            None => {
                self.children.insert(key, child);
            }
        }
        Ok(())
    }

    /// Remove the child with the given name. Returns whether it was present.
    pub fn remove_child(&mut self, name: &str) -> NodeResult<bool> {
        self.ensure_not_built()?;
        Ok(self.children.shift_remove(&NameRef::new(name)).is_some())
    }

    /// Freeze the builder and produce a node from its current contents.
    ///
    /// Each call returns a new node instance.
    pub fn build(&mut self) -> Node {
        self.state = BuilderState::Built;
        ObjectNode::from_map(self.name.clone(), self.children.clone()).into()
    }

    fn ensure_not_built(&self) -> NodeResult<()> {
        match self.state {
            BuilderState::Building => Ok(()),
            BuilderState::Built => Err(NodeError::AlreadyBuilt),
        }
    }
}

impl TryFrom<&Node> for ObjectNodeBuilder {
    type Error = NodeError;

    fn try_from(node: &Node) -> NodeResult<Self> {
        match node.as_object() {
            Some(object) => Ok(Self::from_node(object)),
            None => Err(NodeError::NotAnObject { kind: node.kind() }),
        }
    }
}
