use cfgtree_node::Node;

use crate::options::MergeOptions;

/// Caller-supplied override for merging specific node pairs.
///
/// The engine asks the hook first at every level of the recursion, including
/// pairs whose kinds differ. Returning `Some` claims the pair: the node is
/// used as the merge result verbatim and the built-in rules are skipped for
/// that subtree. Returning `None` hands the pair back to the built-in rules.
///
/// Closures of the form `Fn(&Node, &Node) -> Option<Node>` implement this
/// trait directly.
pub trait CustomMerge: Send + Sync {
    fn try_merge(&self, left: &Node, right: &Node, options: &MergeOptions) -> Option<Node>;
}

impl<F> CustomMerge for F
where
    F: Fn(&Node, &Node) -> Option<Node> + Send + Sync,
{
    fn try_merge(&self, left: &Node, right: &Node, _options: &MergeOptions) -> Option<Node> {
        self(left, right)
    }
}
