//! Navigating a settings tree by path.
//!
//! A path is a sequence of segments. Object nodes resolve a segment as a
//! case-insensitive key. Array nodes resolve only segments of the form
//! `[<index>]`, where the index is a run of ASCII digits in range. Value nodes
//! resolve nothing. A miss anywhere yields `None` and the remaining segments
//! are ignored.

use crate::node::Node;

impl Node {
    /// Descend through the tree following `path`.
    ///
    /// An empty path returns this very node, whatever its variant.
    ///
    /// ```
    /// use cfgtree_node::Node;
    ///
    /// let tree = Node::object(
    ///     "root",
    ///     [Node::array("hosts", [Node::unnamed_leaf("a"), Node::unnamed_leaf("b")])],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(tree.scope_to(["HOSTS", "[1]"]).and_then(Node::value), Some("b"));
    /// assert!(tree.scope_to(["hosts", "1"]).is_none());
    /// ```
    pub fn scope_to<I>(&self, path: I) -> Option<&Node>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut current = self;
        for segment in path {
            current = current.child_by_segment(segment.as_ref())?;
        }
        Some(current)
    }

    /// Resolve a single path segment against this node.
    pub fn child_by_segment(&self, segment: &str) -> Option<&Node> {
        match self {
            Node::Object(node) => node.get(segment),
            Node::Array(node) => parse_index_segment(segment).and_then(|index| node.get(index)),
            Node::Value(_) => None,
        }
    }
}

/// Scope from a root that may itself be absent.
pub fn scope_to_optional<I>(node: Option<&Node>, path: I) -> Option<&Node>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    node?.scope_to(path)
}

/// Parse an array selector of the form `[<digits>]`.
pub fn parse_index_segment(segment: &str) -> Option<usize> {
    let digits = segment.strip_prefix('[')?.strip_suffix(']')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
