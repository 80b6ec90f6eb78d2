//! Graph algorithms used by the analysis layer.
//!
//! ## Cycle Detection
//!
//! - [`has_cycle`] - Check whether a cycle is reachable from a node
//! - [`find_cycle`] - Find the first cycle reachable from a node
//! - [`find_cycles`] - First cycle of every DFS tree, rooted in node order
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | `find_cycles` | O(V + E) | Deadlock detection over a wait-for graph |
//!
//! All traversals use an explicit stack, so graph depth is bounded by heap
//! memory rather than by the thread's call stack.

mod cycles;

pub use cycles::{find_cycle, find_cycles, has_cycle};
