//! The recursive merge algorithm.
//!
//! Rules, applied to a `(left, right)` pair in order:
//!
//! 1. A configured [`CustomMerge`](crate::CustomMerge) hook that returns a
//!    node decides the pair.
//! 2. Nodes of different kinds, and value/value pairs: right wins.
//! 3. Object/object: [`ObjectMergeStyle`] decides.
//! 4. Array/array: [`ArrayMergeStyle`] decides.
//!
//! Subtrees that a rule passes through unchanged are shared with the input,
//! not copied.

use std::collections::HashSet;

use cfgtree_node::{ArrayNode, Node, ObjectNode};
use tracing::{debug, trace};

use crate::options::{ArrayMergeStyle, MergeOptions, ObjectMergeStyle};

/// Merge `right` into `left`.
///
/// An absent `right` is the identity: `left` itself is returned.
pub fn merge(left: &Node, right: Option<&Node>, options: &MergeOptions) -> Node {
    let Some(right) = right else {
        return left.clone();
    };
    debug!(
        object_style = ?options.object_style,
        array_style = ?options.array_style,
        custom = options.custom_merge.is_some(),
        "merging settings trees"
    );
    merge_nodes(left, right, options)
}

/// Merge two trees either of which may be absent.
///
/// The present side wins when the other is absent; two absent trees merge to
/// `None`.
pub fn merge_optional(
    left: Option<&Node>,
    right: Option<&Node>,
    options: &MergeOptions,
) -> Option<Node> {
    match left {
        Some(left) => Some(merge(left, right, options)),
        None => right.cloned(),
    }
}

/// Fold layers from lowest to highest precedence.
///
/// Returns `None` when there are no layers.
pub fn merge_all<'a>(
    layers: impl IntoIterator<Item = &'a Node>,
    options: &MergeOptions,
) -> Option<Node> {
    layers
        .into_iter()
        .fold(None, |acc, layer| merge_optional(acc.as_ref(), Some(layer), options))
}

/// Method form of [`merge`].
pub trait MergeExt {
    fn merge_with(&self, other: Option<&Node>, options: &MergeOptions) -> Node;
}

impl MergeExt for Node {
    fn merge_with(&self, other: Option<&Node>, options: &MergeOptions) -> Node {
        merge(self, other, options)
    }
}

fn merge_nodes(left: &Node, right: &Node, options: &MergeOptions) -> Node {
    if let Some(hook) = &options.custom_merge {
        if let Some(result) = hook.try_merge(left, right, options) {
            trace!(left = ?left.name(), right = ?right.name(), "custom merge handled pair");
            return result;
        }
    }

    match (left, right) {
        (Node::Object(l), Node::Object(r)) => match options.object_style {
            ObjectMergeStyle::Shallow => merge_shallow(l, r, right, options),
            ObjectMergeStyle::Deep => merge_deep(l, r, options),
        },
        (Node::Array(l), Node::Array(r)) => match options.array_style {
            ArrayMergeStyle::Replace => right.clone(),
            ArrayMergeStyle::Concat => concat(l, r),
            ArrayMergeStyle::Union => union(l, r),
            ArrayMergeStyle::PerElement => merge_per_element(l, r, options),
        },
        (Node::Value(_), _)
        | (_, Node::Value(_))
        | (Node::Object(_), Node::Array(_))
        | (Node::Array(_), Node::Object(_)) => right.clone(),
    }
}

fn owned_name(name: Option<&str>) -> Option<String> {
    name.map(str::to_string)
}

fn merge_shallow(
    left: &ObjectNode,
    right: &ObjectNode,
    right_node: &Node,
    options: &MergeOptions,
) -> Node {
    if !left.has_same_keys(right) {
        trace!(
            left_keys = left.len(),
            right_keys = right.len(),
            "shallow merge: key sets differ, right object replaces left"
        );
        return right_node.clone();
    }

    let entries = right.entries().map(|(key, right_child)| {
        let merged = match left.get(key.as_str()) {
            Some(left_child) => merge_nodes(left_child, right_child, options),
            None => right_child.clone(),
        };
        (key.clone(), merged)
    });
    ObjectNode::from_entries(owned_name(right.name()), entries).into()
}

fn merge_deep(left: &ObjectNode, right: &ObjectNode, options: &MergeOptions) -> Node {
    let mut entries = Vec::with_capacity(left.len() + right.len());

    for (key, left_child) in left.entries() {
        let merged = match right.get(key.as_str()) {
            Some(right_child) => merge_nodes(left_child, right_child, options),
            None => left_child.clone(),
        };
        entries.push((key.clone(), merged));
    }

    for (key, right_child) in right.entries() {
        if !left.contains_key(key.as_str()) {
            entries.push((key.clone(), right_child.clone()));
        }
    }

    ObjectNode::from_entries(owned_name(left.name()), entries).into()
}

fn concat(left: &ArrayNode, right: &ArrayNode) -> Node {
    let children = left.children().chain(right.children()).cloned();
    ArrayNode::new(owned_name(left.name()), children).into()
}

fn union(left: &ArrayNode, right: &ArrayNode) -> Node {
    let mut seen = HashSet::with_capacity(left.len() + right.len());
    let children: Vec<Node> = left
        .children()
        .chain(right.children())
        .filter(|child| seen.insert(*child))
        .cloned()
        .collect();
    ArrayNode::new(owned_name(left.name()), children).into()
}

fn merge_per_element(left: &ArrayNode, right: &ArrayNode, options: &MergeOptions) -> Node {
    let shared = left.len().min(right.len());
    let longer = if left.len() > right.len() { left } else { right };

    let mut children = Vec::with_capacity(longer.len());
    children.extend(
        left.children()
            .zip(right.children())
            .map(|(l, r)| merge_nodes(l, r, options)),
    );
    children.extend(longer.as_slice()[shared..].iter().cloned());

    ArrayNode::new(owned_name(left.name()), children).into()
}
