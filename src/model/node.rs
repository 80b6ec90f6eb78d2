//! Process and resource nodes.

use serde::{Deserialize, Serialize};
use strum::Display;

/// The two roles a node can play in a resource-allocation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// An entity that holds and requests resource instances.
    Process,
    /// An entity with a fixed number of allocatable instances.
    Resource,
}

/// A node of an [`AllocationGraph`](crate::model::AllocationGraph).
///
/// Ids are unique across both variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A process node.
    Process {
        /// Unique node id
        id: String,
    },
    /// A resource node.
    Resource {
        /// Unique node id
        id: String,
        /// Total capacity, always at least 1
        instances: u32,
    },
}

impl Node {
    /// Returns the node id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Node::Process { id } | Node::Resource { id, .. } => id,
        }
    }

    /// Returns whether this is a process or a resource.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Process { .. } => NodeKind::Process,
            Node::Resource { .. } => NodeKind::Resource,
        }
    }

    /// Returns the capacity of a resource, `None` for a process.
    #[must_use]
    pub fn instances(&self) -> Option<u32> {
        match self {
            Node::Process { .. } => None,
            Node::Resource { instances, .. } => Some(*instances),
        }
    }

    /// Returns `true` for process nodes.
    #[must_use]
    pub fn is_process(&self) -> bool {
        matches!(self, Node::Process { .. })
    }

    /// Returns `true` for resource nodes.
    #[must_use]
    pub fn is_resource(&self) -> bool {
        matches!(self, Node::Resource { .. })
    }
}
