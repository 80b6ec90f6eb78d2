//! Node identifier for the internal directed graph.
//!
//! [`NodeId`] is a dense, position-based index. The analysis layer assigns node ids
//! in process declaration order, so `NodeId::new(i)` is always the `i`-th process
//! of the snapshot the graph was derived from.

use std::fmt;

/// A strongly-typed index of a node within a [`DirectedGraph`](crate::utils::graph::DirectedGraph).
///
/// Ids are handed out sequentially from 0 by
/// [`DirectedGraph::add_node`](crate::utils::graph::DirectedGraph::add_node) and are
/// only meaningful for the graph that produced them. They are distinct from the
/// string identities used by [`AllocationGraph`](crate::model::AllocationGraph),
/// which survive node removal; a `NodeId` does not.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a `NodeId` from a raw index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index, suitable for indexing per-node tables.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
