//! Generic directed graph infrastructure.
//!
//! The analysis layer derives small, short-lived graphs from an
//! [`AllocationGraph`](crate::model::AllocationGraph) snapshot (the wait-for graph
//! being the main one) and runs algorithms over them. This module provides the
//! storage and the algorithms, independent of the resource-allocation domain.
//!
//! # Key Components
//!
//! - [`NodeId`] / [`EdgeId`] - Strongly-typed dense indices
//! - [`DirectedGraph`] - Adjacency-list graph with node and edge payloads
//! - [`GraphBase`] / [`Successors`] - Traits algorithms are written against
//! - [`algorithms`] - Cycle detection
//!
//! # Examples
//!
//! ```rust
//! use allocgraph::utils::graph::{algorithms, DirectedGraph};
//!
//! let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
//! let p1 = graph.add_node("P1");
//! let p2 = graph.add_node("P2");
//! graph.add_edge(p1, p2, ());
//! graph.add_edge(p2, p1, ());
//!
//! assert!(algorithms::has_cycle(&graph, p1));
//! ```

mod directed;
mod edge;
mod node;
mod traits;

pub mod algorithms;

pub use directed::DirectedGraph;
pub use edge::EdgeId;
pub use node::NodeId;
pub use traits::{GraphBase, Successors};
