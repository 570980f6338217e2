use thiserror::Error;

use crate::node::NodeKind;

/// Errors produced when constructing settings nodes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// Every child of an object node must carry a name.
    #[error("all child nodes of an object must have non-null names")]
    NamelessChild,

    /// The builder already produced a node and rejects further mutation.
    #[error("this object node builder has already been used to build a node")]
    AlreadyBuilt,

    /// An object node was required but a different kind was supplied.
    #[error("expected an object node, got {kind}")]
    NotAnObject { kind: NodeKind },
}

/// Convenience alias for node results.
pub type NodeResult<T> = Result<T, NodeError>;
