//! The resource-allocation graph model.
//!
//! - [`AllocationGraph`] - the mutable graph and its invariant-enforcing API
//! - [`Node`] / [`NodeKind`] - processes and resources
//! - [`Edge`] / [`EdgeKind`] - request and allocation relations
//! - [`GraphDocument`] - serde-friendly node and edge lists

mod document;
mod edge;
mod graph;
mod node;

pub use document::{EdgeRecord, GraphDocument, NodeRecord};
pub use edge::{Edge, EdgeKind};
pub use graph::AllocationGraph;
pub use node::{Node, NodeKind};
