//! Side-by-side walk of two settings trees.
//!
//! The walker visits both trees in lockstep, accumulating the path of object
//! keys it has descended through. A pair of nodes is recorded as different
//! at the current path when exactly one side is absent or their leaf values
//! differ. Equality checks are stricter: they also reject pairs of different
//! kinds and pairs whose names differ (ignoring case).
//!
//! Object children are paired by key, ignoring case; array children by
//! index. Descending into an array does not extend the path, so a change to
//! an element is reported against the array and against keys inside the
//! element. A single structural change can therefore surface at more than
//! one path.

use std::borrow::Cow;
use std::collections::{btree_set, BTreeSet};
use std::ops::ControlFlow;

use cfgtree_node::{names_equal, Node};
use tracing::debug;

use crate::options::CompareOptions;
use crate::path::SettingsPath;

/// The set of paths at which two trees differ.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Differences {
    paths: BTreeSet<SettingsPath>,
}

impl Differences {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn contains(&self, path: &SettingsPath) -> bool {
        self.paths.contains(path)
    }

    /// Paths in sorted order; ancestors come before descendants.
    pub fn iter(&self) -> btree_set::Iter<'_, SettingsPath> {
        self.paths.iter()
    }

    pub fn into_paths(self) -> BTreeSet<SettingsPath> {
        self.paths
    }
}

impl IntoIterator for Differences {
    type Item = SettingsPath;
    type IntoIter = btree_set::IntoIter<SettingsPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a Differences {
    type Item = &'a SettingsPath;
    type IntoIter = btree_set::Iter<'a, SettingsPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Find every path at which `left` and `right` differ.
///
/// When either root is named, both roots are compared as children of a
/// nameless object keyed by their names, so paths start with the root name.
/// A nameless root sits under the empty key in that case.
pub fn find_differences(left: Option<&Node>, right: Option<&Node>) -> Differences {
    find_differences_with(left, right, &CompareOptions::default())
}

/// [`find_differences`] that skips excluded subtrees.
pub fn find_differences_with(
    left: Option<&Node>,
    right: Option<&Node>,
    options: &CompareOptions,
) -> Differences {
    let mut walker = Walker::new(options, Mode::Collect);
    let _ = walker.walk_roots(left, right);
    debug!(
        differences = walker.found.len(),
        excluded = options.excluded_paths.len(),
        "found settings differences"
    );
    Differences { paths: walker.found }
}

/// The first mismatch found under the equality rules, if any. Stops walking
/// as soon as one is seen.
pub(crate) fn first_mismatch(
    left: Option<&Node>,
    right: Option<&Node>,
    options: &CompareOptions,
) -> Option<SettingsPath> {
    let mut walker = Walker::new(options, Mode::Equality);
    let _ = walker.walk_roots(left, right);
    walker.found.into_iter().next()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Record every difference by value and presence.
    Collect,
    /// Also treat kind and name mismatches as differences; stop at the first.
    Equality,
}

struct Walker<'o> {
    options: &'o CompareOptions,
    mode: Mode,
    path: Vec<String>,
    found: BTreeSet<SettingsPath>,
}

impl<'o> Walker<'o> {
    fn new(options: &'o CompareOptions, mode: Mode) -> Self {
        Self {
            options,
            mode,
            path: Vec::new(),
            found: BTreeSet::new(),
        }
    }

    fn walk_roots(&mut self, left: Option<&Node>, right: Option<&Node>) -> ControlFlow<()> {
        let left_key = left.map(root_key);
        let right_key = right.map(root_key);
        let named = left.and_then(Node::name).is_some() || right.and_then(Node::name).is_some();
        if !named {
            return self.visit(left, right);
        }

        if self.options.is_excluded(&self.path) {
            return ControlFlow::Continue(());
        }
        match (left_key, right_key) {
            (Some(l), Some(r)) if names_equal(Some(l), Some(r)) => self.visit_child(l, left, right),
            _ => {
                if let Some(key) = left_key {
                    self.visit_child(key, left, None)?;
                }
                if let Some(key) = right_key {
                    self.visit_child(key, None, right)?;
                }
                ControlFlow::Continue(())
            }
        }
    }

    fn visit_child(
        &mut self,
        key: &str,
        left: Option<&Node>,
        right: Option<&Node>,
    ) -> ControlFlow<()> {
        self.path.push(key.to_string());
        let flow = self.visit(left, right);
        self.path.pop();
        flow
    }

    fn visit(&mut self, left: Option<&Node>, right: Option<&Node>) -> ControlFlow<()> {
        if self.options.is_excluded(&self.path) {
            return ControlFlow::Continue(());
        }
        if let (Some(l), Some(r)) = (left, right) {
            if Node::same_instance(l, r) {
                return ControlFlow::Continue(());
            }
        }

        let mismatch = match self.mode {
            Mode::Collect => differs_here(left, right),
            Mode::Equality => differs_here(left, right) || shape_differs(left, right),
        };
        if mismatch {
            self.record()?;
        }

        let in_array = left.is_some_and(Node::is_array) || right.is_some_and(Node::is_array);
        for (key, l, r) in paired_children(left, right) {
            if in_array {
                self.visit(l, r)?;
            } else {
                self.visit_child(&key, l, r)?;
            }
        }
        ControlFlow::Continue(())
    }

    fn record(&mut self) -> ControlFlow<()> {
        self.found.insert(SettingsPath::from(self.path.clone()));
        match self.mode {
            Mode::Collect => ControlFlow::Continue(()),
            Mode::Equality => ControlFlow::Break(()),
        }
    }
}

fn root_key(node: &Node) -> &str {
    node.name().unwrap_or("")
}

fn differs_here(left: Option<&Node>, right: Option<&Node>) -> bool {
    match (left, right) {
        (None, None) => false,
        (Some(_), None) | (None, Some(_)) => true,
        (Some(l), Some(r)) => l.value() != r.value(),
    }
}

fn shape_differs(left: Option<&Node>, right: Option<&Node>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => l.kind() != r.kind() || !names_equal(l.name(), r.name()),
        _ => false,
    }
}

type ChildPair<'a> = (Cow<'a, str>, Option<&'a Node>, Option<&'a Node>);

/// Union of both sides' children, left side first, keyed by object key or
/// stringified index.
fn paired_children<'a>(left: Option<&'a Node>, right: Option<&'a Node>) -> Vec<ChildPair<'a>> {
    let mut pairs = Vec::new();
    for (key, l) in keyed_children(left) {
        let r = child(right, &key);
        pairs.push((key, Some(l), r));
    }
    for (key, r) in keyed_children(right) {
        if child(left, &key).is_none() {
            pairs.push((key, None, Some(r)));
        }
    }
    pairs
}

fn keyed_children(node: Option<&Node>) -> Vec<(Cow<'_, str>, &Node)> {
    match node {
        Some(Node::Object(object)) => object
            .entries()
            .map(|(key, child)| (Cow::Borrowed(key.as_str()), child))
            .collect(),
        Some(Node::Array(array)) => array
            .children()
            .enumerate()
            .map(|(index, child)| (Cow::Owned(index.to_string()), child))
            .collect(),
        Some(Node::Value(_)) | None => Vec::new(),
    }
}

fn child<'a>(node: Option<&'a Node>, key: &str) -> Option<&'a Node> {
    match node {
        Some(Node::Object(object)) => object.get(key),
        Some(Node::Array(array)) => key
            .parse::<usize>()
            .ok()
            .filter(|index| index.to_string() == key)
            .and_then(|index| array.get(index)),
        Some(Node::Value(_)) | None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfgtree_node::{ArrayNode, ObjectNode, ValueNode};
    use proptest::prelude::*;

    fn tree(props: &[(&str, &str)], xs: &[&str]) -> Node {
        Node::object(
            "root",
            [
                Node::object_from_pairs("obj", props.iter().copied()),
                elements(xs),
            ],
        )
        .unwrap()
    }

    fn elements(xs: &[&str]) -> Node {
        Node::array(
            "array",
            xs.iter()
                .enumerate()
                .map(|(i, x)| Node::object(i.to_string(), [Node::leaf("x", *x)]).unwrap()),
        )
    }

    fn base() -> Node {
        tree(&[("prop1", "value1"), ("prop2", "value2")], &["100", "200"])
    }

    fn paths(expected: &[&[&str]]) -> BTreeSet<SettingsPath> {
        expected.iter().map(|p| SettingsPath::from(*p)).collect()
    }

    fn diff(left: &Node, right: &Node) -> BTreeSet<SettingsPath> {
        find_differences(Some(left), Some(right)).into_paths()
    }

    #[test]
    fn equal_trees_have_no_differences() {
        assert!(find_differences(Some(&base()), Some(&base())).is_empty());
    }

    #[test]
    fn child_order_does_not_matter() {
        let left = Node::object_from_pairs("obj", [("a", "1"), ("b", "2")]);
        let right = Node::object_from_pairs("OBJ", [("B", "2"), ("A", "1")]);
        assert!(diff(&left, &right).is_empty());
    }

    #[test]
    fn finds_changed_array_element() {
        let right = tree(&[("prop1", "value1"), ("prop2", "value2")], &["100", "300"]);
        assert_eq!(diff(&base(), &right), paths(&[&["root", "array", "x"]]));
    }

    #[test]
    fn finds_changed_property_value() {
        let right = tree(&[("prop1", "value1"), ("prop2", "value3")], &["100", "200"]);
        assert_eq!(diff(&base(), &right), paths(&[&["root", "obj", "prop2"]]));
    }

    #[test]
    fn finds_missing_and_extra_properties() {
        let right = tree(&[("prop1", "value1"), ("prop3", "value3")], &["100", "200"]);
        assert_eq!(
            diff(&base(), &right),
            paths(&[&["root", "obj", "prop2"], &["root", "obj", "prop3"]])
        );
    }

    #[test]
    fn finds_extra_array_element() {
        let right = tree(&[("prop1", "value1"), ("prop2", "value2")], &["100", "200", "300"]);
        assert_eq!(
            diff(&base(), &right),
            paths(&[&["root", "array"], &["root", "array", "x"]])
        );
    }

    #[test]
    fn finds_missing_array() {
        let right = Node::object(
            "root",
            [Node::object_from_pairs("obj", [("prop1", "value1"), ("prop2", "value2")])],
        )
        .unwrap();
        assert_eq!(
            diff(&base(), &right),
            paths(&[&["root", "array"], &["root", "array", "x"]])
        );
    }

    #[test]
    fn finds_missing_object() {
        let right = Node::object("root", [elements(&["100", "200"])]).unwrap();
        assert_eq!(
            diff(&base(), &right),
            paths(&[&["root", "obj"], &["root", "obj", "prop1"], &["root", "obj", "prop2"]])
        );
    }

    #[test]
    fn kind_change_without_value_change_is_not_reported() {
        let left = Node::object("root", [Node::null_leaf("k")]).unwrap();
        let right = Node::object("root", [Node::empty_object(Some("k".into()))]).unwrap();
        assert!(diff(&left, &right).is_empty());
    }

    #[test]
    fn array_element_names_are_not_compared() {
        let left = Node::object("root", [Node::array("arr", [Node::leaf("a", "1")])]).unwrap();
        let right = Node::object("root", [Node::array("arr", [Node::leaf("b", "1")])]).unwrap();
        assert!(diff(&left, &right).is_empty());
    }

    #[test]
    fn equality_rules_catch_kind_and_name_changes() {
        let options = CompareOptions::default();
        let left = Node::object("root", [Node::null_leaf("k")]).unwrap();
        let right = Node::object("root", [Node::empty_object(Some("k".into()))]).unwrap();
        assert_eq!(
            first_mismatch(Some(&left), Some(&right), &options),
            Some(SettingsPath::from(["root", "k"]))
        );

        let left = Node::object("root", [Node::array("arr", [Node::leaf("a", "1")])]).unwrap();
        let right = Node::object("root", [Node::array("arr", [Node::leaf("b", "1")])]).unwrap();
        assert_eq!(
            first_mismatch(Some(&left), Some(&right), &options),
            Some(SettingsPath::from(["root", "arr"]))
        );
    }

    #[test]
    fn unnamed_roots_are_compared_directly() {
        let left = Node::unnamed_object([Node::leaf("a", "1")]).unwrap();
        let right = Node::unnamed_object([Node::leaf("a", "2")]).unwrap();
        assert_eq!(diff(&left, &right), paths(&[&["a"]]));
    }

    #[test]
    fn differently_named_roots_differ_at_both_names() {
        let left = Node::object_from_pairs("one", [("a", "1")]);
        let right = Node::object_from_pairs("two", [("a", "1")]);
        assert_eq!(
            diff(&left, &right),
            paths(&[&["one"], &["one", "a"], &["two"], &["two", "a"]])
        );
    }

    #[test]
    fn absent_sides() {
        assert!(find_differences(None, None).is_empty());
        let node = Node::leaf("a", "1");
        assert_eq!(
            find_differences(Some(&node), None).into_paths(),
            paths(&[&["a"]])
        );
        let unnamed = Node::unnamed_leaf("1");
        let found = find_differences(None, Some(&unnamed));
        assert_eq!(found.len(), 1);
        assert!(found.contains(&SettingsPath::root()));
    }

    #[test]
    fn excluded_subtrees_are_skipped() {
        let right = tree(&[("prop1", "value1"), ("prop2", "value3")], &["100", "300"]);
        let options = CompareOptions::new().with_excluded_path(["root", "obj"]);
        let found = find_differences_with(Some(&base()), Some(&right), &options);
        assert_eq!(found.len(), 1);
        assert!(found.contains(&SettingsPath::from(["root", "array", "x"])));
    }

    #[test]
    fn iterates_in_sorted_order() {
        let right = tree(&[("prop1", "value1"), ("prop2", "value2")], &["100", "200", "300"]);
        let found = find_differences(Some(&base()), Some(&right));
        let rendered: Vec<String> = found.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["root.array", "root.array.x"]);
    }

    /// Rebuilds a tree node by node so no instance is shared with the input.
    fn rebuild(node: &Node) -> Node {
        let name = node.name().map(str::to_string);
        match node {
            Node::Value(v) => ValueNode::new(name, v.value().map(str::to_string)).into(),
            Node::Array(a) => ArrayNode::new(name, a.children().map(rebuild)).into(),
            Node::Object(o) => {
                let entries = o.entries().map(|(k, c)| (k.clone(), rebuild(c)));
                ObjectNode::from_entries(name, entries).into()
            }
        }
    }

    fn arb_tree() -> impl Strategy<Value = Node> {
        let leaf = ("[a-c]{1,2}", proptest::option::of("[0-9]{0,2}"))
            .prop_map(|(name, value)| Node::from(ValueNode::new(Some(name), value)));
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop_oneof![
                ("[a-c]{1,2}", prop::collection::vec(inner.clone(), 0..3))
                    .prop_map(|(name, children)| Node::array(name, children)),
                ("[a-c]{1,2}", prop::collection::vec(inner, 0..3))
                    .prop_map(|(name, children)| Node::object(name, children).unwrap()),
            ]
        })
    }

    proptest! {
        #[test]
        fn a_tree_never_differs_from_its_copy(tree in arb_tree()) {
            prop_assert!(find_differences(Some(&tree), Some(&rebuild(&tree))).is_empty());
        }

        #[test]
        fn every_difference_is_symmetric(a in arb_tree(), b in arb_tree()) {
            let forward = find_differences(Some(&a), Some(&b));
            let backward = find_differences(Some(&b), Some(&a));
            prop_assert_eq!(forward.is_empty(), backward.is_empty());
        }
    }
}
