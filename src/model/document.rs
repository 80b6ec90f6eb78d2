//! Serializable node/edge lists for transport and persistence by hosts.
//!
//! A [`GraphDocument`] is a plain list of nodes and a plain list of edges. Loading
//! one replays every record through the [`AllocationGraph`] mutation API, so a
//! document that violates id uniqueness or edge roles is rejected with the same
//! errors an interactive edit would get.
//!
//! ```json
//! {
//!   "nodes": [
//!     { "id": "P1", "kind": "process" },
//!     { "id": "R1", "kind": "resource", "instances": 2 }
//!   ],
//!   "edges": [
//!     { "id": "e1", "from": "R1", "to": "P1", "kind": "allocation" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    config::Limits,
    model::{graph::clamp_instances, AllocationGraph, EdgeKind, Node, NodeKind},
    Result,
};

/// One node of a [`GraphDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node id
    pub id: String,
    /// Process or resource
    pub kind: NodeKind,
    /// Capacity of a resource; defaults to 1 when absent and is clamped to at
    /// least 1 on load. Ignored for processes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instances: Option<i64>,
}

/// One edge of a [`GraphDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Edge id
    pub id: String,
    /// Source node id
    pub from: String,
    /// Target node id
    pub to: String,
    /// Request or allocation
    pub kind: EdgeKind,
}

/// A serializable snapshot of an [`AllocationGraph`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Nodes in declaration order
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    /// Edges in declaration order
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        NodeRecord {
            id: node.id().to_string(),
            kind: node.kind(),
            instances: node.instances().map(i64::from),
        }
    }
}

impl AllocationGraph {
    /// Captures the graph as a document.
    #[must_use]
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            nodes: self.nodes().map(NodeRecord::from).collect(),
            edges: self
                .edges()
                .map(|edge| EdgeRecord {
                    id: edge.id.clone(),
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    kind: edge.kind,
                })
                .collect(),
        }
    }

    /// Builds a graph from a document, checking its size against `limits` first.
    ///
    /// Nodes are inserted before edges, so edge records may reference nodes
    /// declared anywhere in the node list.
    ///
    /// # Errors
    ///
    /// - [`Error::LimitExceeded`](crate::Error::LimitExceeded) if the document is too large
    /// - [`Error::DuplicateNode`](crate::Error::DuplicateNode) /
    ///   [`Error::DuplicateEdge`](crate::Error::DuplicateEdge) on repeated ids
    /// - [`Error::InvalidEdge`](crate::Error::InvalidEdge) for any malformed edge
    pub fn from_document(document: &GraphDocument, limits: &Limits) -> Result<Self> {
        limits.check_counts(document.nodes.len(), document.edges.len())?;

        let mut graph = AllocationGraph::new();
        for record in &document.nodes {
            match record.kind {
                NodeKind::Process => {
                    if record.instances.is_some() {
                        log::warn!("ignoring instances on process {}", record.id);
                    }
                    graph.insert_process(record.id.as_str())?;
                }
                NodeKind::Resource => {
                    let instances = clamp_instances(record.instances.unwrap_or(1));
                    graph.insert_resource(record.id.as_str(), instances)?;
                }
            }
        }
        for record in &document.edges {
            graph.insert_edge(record.id.as_str(), &record.from, &record.to, record.kind)?;
        }

        log::debug!(
            "loaded graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Serializes the graph as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`](crate::Error::Serialization) if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    /// Parses a JSON document and builds the graph it describes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`](crate::Error::Serialization) for malformed
    /// JSON, otherwise the errors of [`from_document`](Self::from_document).
    pub fn from_json(json: &str, limits: &Limits) -> Result<Self> {
        let document: GraphDocument = serde_json::from_str(json)?;
        Self::from_document(&document, limits)
    }
}
