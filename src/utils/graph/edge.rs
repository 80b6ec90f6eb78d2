//! Edge identifier for the internal directed graph.

use std::fmt;

/// A strongly-typed index of an edge within a [`DirectedGraph`](crate::utils::graph::DirectedGraph).
///
/// Edge ids are assigned sequentially from 0 by
/// [`DirectedGraph::add_edge`](crate::utils::graph::DirectedGraph::add_edge). Keeping
/// them a separate type from [`NodeId`](crate::utils::graph::NodeId) makes it a
/// compile error to look up an edge with a node index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates an `EdgeId` from a raw index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
