//! Request and allocation edges.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::model::NodeKind;

/// The relation an edge expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Process → resource: the process waits for one instance.
    Request,
    /// Resource → process: one instance is held by the process.
    Allocation,
}

impl EdgeKind {
    /// Returns the `(from, to)` node kinds this edge kind connects.
    #[must_use]
    pub const fn endpoints(self) -> (NodeKind, NodeKind) {
        match self {
            EdgeKind::Request => (NodeKind::Process, NodeKind::Resource),
            EdgeKind::Allocation => (NodeKind::Resource, NodeKind::Process),
        }
    }
}

/// A directed edge of an [`AllocationGraph`](crate::model::AllocationGraph).
///
/// Parallel edges with the same kind and direction are allowed and count as
/// separate instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Unique edge id
    pub id: String,
    /// Source node id
    pub from: String,
    /// Target node id
    pub to: String,
    /// Request or allocation
    pub kind: EdgeKind,
}

impl Edge {
    /// Returns `true` if either endpoint is `node`.
    #[must_use]
    pub fn touches(&self, node: &str) -> bool {
        self.from == node || self.to == node
    }

    /// Returns `true` for request edges.
    #[must_use]
    pub fn is_request(&self) -> bool {
        self.kind == EdgeKind::Request
    }

    /// Returns `true` for allocation edges.
    #[must_use]
    pub fn is_allocation(&self) -> bool {
        self.kind == EdgeKind::Allocation
    }
}
