//! Settings tree model.
//!
//! A settings tree is an immutable structure of three node kinds: leaves
//! holding an optional string, objects holding named children, and arrays
//! holding ordered children. Names and object keys compare case-insensitively
//! everywhere; leaf values compare exactly. The merge and diff engines build
//! on the types defined here.
//!
//! # Key Types
//!
//! - [`Node`] -- The node sum type (`Value` / `Object` / `Array`)
//! - [`ValueNode`], [`ObjectNode`], [`ArrayNode`] -- Per-variant payloads
//! - [`ObjectNodeBuilder`] -- One-shot mutable builder for object nodes
//! - [`NodeName`] -- Case-insensitive name used as the object key type

pub mod array;
pub mod builder;
pub mod error;
pub mod name;
pub mod node;
pub mod object;
pub mod render;
pub mod scope;
pub mod value;

pub use array::ArrayNode;
pub use builder::{BuilderState, ObjectNodeBuilder};
pub use error::{NodeError, NodeResult};
pub use name::{compare_names, name_hash, names_equal, NameRef, NodeName};
pub use node::{Children, Node, NodeKind};
pub use object::ObjectNode;
pub use scope::{parse_index_segment, scope_to_optional};
pub use value::ValueNode;
