//! Adjacency-list directed graph.
//!
//! [`DirectedGraph`] stores node payloads and edge payloads in insertion order and
//! keeps a per-node list of outgoing edges. Successor iteration therefore follows
//! the order in which edges were added, which the deadlock detector depends on to
//! reproduce a deterministic "first cycle wins" result.

use crate::utils::graph::{
    edge::EdgeId,
    node::NodeId,
    traits::{GraphBase, Successors},
};

/// Internal storage for an edge payload and its target.
#[derive(Debug, Clone)]
struct EdgeData<E> {
    target: NodeId,
    data: E,
}

/// A directed graph with typed node and edge payloads.
///
/// Nodes and edges are append-only: the graph is built once from a snapshot and
/// then treated as immutable while algorithms run over it. Parallel edges and
/// self-loops are representable; callers that need set semantics deduplicate
/// before inserting.
///
/// # Examples
///
/// ```rust
/// use allocgraph::utils::graph::{DirectedGraph, Successors};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("P1");
/// let b = graph.add_node("P2");
/// graph.add_edge(a, b, ());
///
/// let next: Vec<_> = graph.successors(a).collect();
/// assert_eq!(next, vec![b]);
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, E> {
    /// Node payloads, indexed by `NodeId`
    nodes: Vec<N>,
    /// Edge payloads and endpoints, indexed by `EdgeId`
    edges: Vec<EdgeData<E>>,
    /// Outgoing edges per node, in insertion order
    outgoing: Vec<Vec<EdgeId>>,
}

impl<N, E> Default for DirectedGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> DirectedGraph<N, E> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Adds a node and returns its id. Ids are sequential from 0.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(data);
        self.outgoing.push(Vec::new());
        id
    }

    /// Adds a directed edge from `source` to `target`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint was not returned by [`add_node`](Self::add_node)
    /// on this graph.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, data: E) -> EdgeId {
        assert!(
            source.index() < self.nodes.len(),
            "source node {source} does not exist in graph with {} nodes",
            self.nodes.len()
        );
        assert!(
            target.index() < self.nodes.len(),
            "target node {target} does not exist in graph with {} nodes",
            self.nodes.len()
        );

        let id = EdgeId::new(self.edges.len());
        self.outgoing[source.index()].push(id);
        self.edges.push(EdgeData { target, data });
        id
    }

    /// Returns the payload of `node`, if it exists.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(node.index())
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns all node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Returns all nodes together with their ids.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, data)| (NodeId::new(i), data))
    }

    /// Returns the payload of `edge`, if it exists.
    #[must_use]
    pub fn edge_data(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge.index()).map(|e| &e.data)
    }

    /// Returns a mutable reference to the payload of `edge`, if it exists.
    pub fn edge_data_mut(&mut self, edge: EdgeId) -> Option<&mut E> {
        self.edges.get_mut(edge.index()).map(|e| &mut e.data)
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the successors of `node` in edge insertion order.
    ///
    /// Unknown nodes have no successors.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing
            .get(node.index())
            .into_iter()
            .flatten()
            .map(|edge| self.edges[edge.index()].target)
    }

    /// Returns the first edge from `source` to `target`, if any.
    #[must_use]
    pub fn find_edge(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        self.outgoing
            .get(source.index())?
            .iter()
            .copied()
            .find(|edge| self.edges[edge.index()].target == target)
    }
}

impl<N, E> GraphBase for DirectedGraph<N, E> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }
}

impl<N, E> Successors for DirectedGraph<N, E> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        DirectedGraph::successors(self, node)
    }
}
