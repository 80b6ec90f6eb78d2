//! Trait seams between graph storage and graph algorithms.
//!
//! Algorithms in [`algorithms`](crate::utils::graph::algorithms) are written against
//! these traits rather than a concrete graph, so they can run over the wait-for graph
//! as well as over ad-hoc test graphs.
//!
//! - [`GraphBase`] - node count and node iteration
//! - [`Successors`] - forward adjacency

use crate::utils::graph::NodeId;

/// Core graph properties: the number of nodes and their identifiers.
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers.
    ///
    /// Implementations yield nodes in ascending `NodeId` order, which is the order
    /// they were added. Algorithms rely on this for deterministic root selection.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns the successors of `node` in edge insertion order.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}
