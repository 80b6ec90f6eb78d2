//! Size limits applied by hosts before analysis.
//!
//! Neither analysis supports cancellation, so a host that accepts graphs from
//! untrusted input should bound their size up front. [`Limits`] carries that
//! ceiling; it is applied when loading a [`GraphDocument`](crate::model::GraphDocument)
//! and can be checked against any [`AllocationGraph`] directly.

use crate::{model::AllocationGraph, Error, Result};

/// Node and edge ceilings for a graph.
///
/// The default is sized for interactive editing; [`Limits::unbounded`] disables
/// both checks.
///
/// # Examples
///
/// ```rust
/// use allocgraph::{config::Limits, model::AllocationGraph};
///
/// let graph = AllocationGraph::classic_deadlock();
/// assert!(Limits::default().check(&graph).is_ok());
/// assert!(Limits::new(2, 100).check(&graph).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of nodes (processes plus resources)
    pub max_nodes: usize,
    /// Maximum number of edges
    pub max_edges: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self::interactive()
    }
}

impl Limits {
    /// Creates limits with explicit ceilings.
    #[must_use]
    pub const fn new(max_nodes: usize, max_edges: usize) -> Self {
        Limits {
            max_nodes,
            max_edges,
        }
    }

    /// Ceilings for hand-edited graphs: 256 nodes, 4096 edges.
    #[must_use]
    pub const fn interactive() -> Self {
        Self::new(256, 4096)
    }

    /// No ceiling at all.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(usize::MAX, usize::MAX)
    }

    /// Checks raw node and edge counts against the ceilings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LimitExceeded`] for the first ceiling exceeded, nodes first.
    pub fn check_counts(&self, nodes: usize, edges: usize) -> Result<()> {
        if nodes > self.max_nodes {
            return Err(Error::LimitExceeded {
                what: "nodes",
                count: nodes,
                limit: self.max_nodes,
            });
        }
        if edges > self.max_edges {
            return Err(Error::LimitExceeded {
                what: "edges",
                count: edges,
                limit: self.max_edges,
            });
        }
        Ok(())
    }

    /// Checks a graph against the ceilings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LimitExceeded`] if the graph is too large.
    pub fn check(&self, graph: &AllocationGraph) -> Result<()> {
        self.check_counts(graph.node_count(), graph.edge_count())
    }
}
