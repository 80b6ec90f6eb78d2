//! # allocgraph Prelude
//!
//! The types and functions most programs need: the graph, its node and edge
//! kinds, both analyses and their reports, and the error type.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all allocgraph operations
pub use crate::Error;

/// Why an edge was rejected
pub use crate::EdgeViolation;

/// The result type used throughout allocgraph
pub use crate::Result;

/// Size ceilings for loaded graphs
pub use crate::config::Limits;

// ================================================================================================
// Graph Model
// ================================================================================================

pub use crate::model::{AllocationGraph, Edge, EdgeKind, GraphDocument, Node, NodeKind};

// ================================================================================================
// Analyses
// ================================================================================================

pub use crate::analysis::{
    allocation_matrix, availability, detect_deadlock, evaluate_safety, is_safe_sequence,
    request_matrix, Availability, DeadlockReport, Matrix, SafetyReport,
};
