use thiserror::Error;

use crate::model::{EdgeKind, NodeKind};

/// The rule an edge violated when it was rejected by
/// [`AllocationGraph::add_edge`](crate::model::AllocationGraph::add_edge).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeViolation {
    /// The edge starts and ends at the same node.
    SelfLoop,

    /// An endpoint names a node that does not exist.
    DanglingEndpoint(String),

    /// The endpoint kinds do not match the edge kind.
    ///
    /// Request edges must run process → resource, allocation edges resource → process.
    RoleMismatch {
        /// Kind of the `from` node
        from: NodeKind,
        /// Kind of the `to` node
        to: NodeKind,
    },
}

impl std::fmt::Display for EdgeViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeViolation::SelfLoop => write!(f, "self-loops are not allowed"),
            EdgeViolation::DanglingEndpoint(id) => write!(f, "node '{id}' does not exist"),
            EdgeViolation::RoleMismatch { from, to } => {
                write!(f, "cannot connect a {from} to a {to}")
            }
        }
    }
}

/// The error type for every fallible operation in this crate.
///
/// Mutation errors are local and non-fatal: a rejected operation leaves the
/// [`AllocationGraph`](crate::model::AllocationGraph) exactly as it was, and the
/// caller decides whether to report and retry. The analyses themselves never fail.
///
/// # Error Categories
///
/// ## Graph Mutation
/// - [`Error::InvalidEdge`] - Edge violates a structural rule
/// - [`Error::NotFound`] - Operation on an absent node or edge id
/// - [`Error::DuplicateNode`] / [`Error::DuplicateEdge`] - Explicit id already in use
///
/// ## Host Integration
/// - [`Error::LimitExceeded`] - Graph is larger than the configured ceiling
/// - [`Error::Serialization`] - Malformed graph document
///
/// # Examples
///
/// ```rust
/// use allocgraph::{model::{AllocationGraph, EdgeKind}, Error};
///
/// let mut graph = AllocationGraph::new();
/// let p = graph.add_process();
///
/// match graph.add_edge(&p, &p, EdgeKind::Request) {
///     Err(Error::InvalidEdge { violation, .. }) => println!("rejected: {violation}"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An edge was rejected because it violates a structural rule.
    ///
    /// The graph is unchanged.
    #[error("Invalid {kind} edge {from} -> {to}: {violation}")]
    InvalidEdge {
        /// Requested source node id
        from: String,
        /// Requested target node id
        to: String,
        /// Requested edge kind
        kind: EdgeKind,
        /// The violated rule
        violation: EdgeViolation,
    },

    /// No node or edge with the given id exists.
    #[error("No {what} with id '{id}'")]
    NotFound {
        /// What was looked up ("node", "edge" or "resource")
        what: &'static str,
        /// The id that was not found
        id: String,
    },

    /// A node with this id already exists.
    ///
    /// Node ids are unique across processes and resources.
    #[error("A node with id '{0}' already exists")]
    DuplicateNode(String),

    /// An edge with this id already exists.
    #[error("An edge with id '{0}' already exists")]
    DuplicateEdge(String),

    /// The graph exceeds a configured size ceiling.
    ///
    /// Raised by [`Limits::check`](crate::config::Limits::check) and when loading
    /// documents, before any analysis runs.
    #[error("Graph has {count} {what}, exceeding the limit of {limit}")]
    LimitExceeded {
        /// What was counted ("nodes" or "edges")
        what: &'static str,
        /// Actual count
        count: usize,
        /// Configured limit
        limit: usize,
    },

    /// A graph document could not be serialized or deserialized.
    #[error("{0}")]
    Serialization(#[from] serde_json::Error),
}
