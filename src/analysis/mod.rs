//! Read-only analyses over an [`AllocationGraph`](crate::model::AllocationGraph).
//!
//! Every function here takes `&AllocationGraph` and returns a freshly computed
//! value; nothing is cached between calls.
//!
//! - [`matrix`] - allocation, request and availability projections
//! - [`waitfor`] - process-level wait-for graph
//! - [`detect_deadlock`] - cycle search on the wait-for graph
//! - [`evaluate_safety`] - Banker's-algorithm safety check
//!
//! # Usage
//!
//! ```rust
//! use allocgraph::{analysis, model::AllocationGraph};
//!
//! let graph = AllocationGraph::classic_deadlock();
//!
//! let deadlock = analysis::detect_deadlock(&graph);
//! let safety = analysis::evaluate_safety(&graph);
//! assert!(deadlock.is_deadlocked());
//! assert!(!safety.is_safe());
//!
//! let available = analysis::availability(&graph);
//! assert_eq!(available.get("R1"), 0);
//! ```

mod deadlock;
pub mod matrix;
mod safety;
pub mod waitfor;

pub use deadlock::{detect_deadlock, DeadlockReport};
pub use matrix::{allocation_matrix, availability, request_matrix, Availability, Matrix};
pub use safety::{evaluate_safety, is_safe_sequence, SafetyReport};
pub use waitfor::{WaitCause, WaitForGraph};
