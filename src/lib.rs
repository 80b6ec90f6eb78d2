// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # allocgraph
//!
//! [![Crates.io](https://img.shields.io/crates/v/allocgraph.svg)](https://crates.io/crates/allocgraph)
//! [![Documentation](https://docs.rs/allocgraph/badge.svg)](https://docs.rs/allocgraph)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/allocgraph/blob/main/LICENSE-APACHE)
//!
//! A resource-allocation graph engine: model processes, resources with a fixed
//! number of instances, and the request and allocation edges between them, then
//! ask two questions about the current state.
//!
//! - **Deadlock detection** - derive the wait-for graph and report every process
//!   and edge on a wait-for cycle
//! - **Safety evaluation** - run the Banker's algorithm and report a safe
//!   completion sequence, or the processes that can never finish
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! allocgraph = "0.1"
//! ```
//!
//! ```rust
//! use allocgraph::prelude::*;
//!
//! let mut graph = AllocationGraph::classic_deadlock();
//!
//! let report = detect_deadlock(&graph);
//! assert_eq!(report.nodes, vec!["P1", "P2"]);
//! assert!(!evaluate_safety(&graph).is_safe());
//!
//! // Withdraw P2's request for R1 and both processes can finish
//! graph.remove_edge("e4")?;
//! assert!(detect_deadlock(&graph).is_empty());
//! assert!(evaluate_safety(&graph).is_safe());
//! # Ok::<(), allocgraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`model`] - the mutable [`model::AllocationGraph`] and its serializable document form
//! - [`analysis`] - matrix projections, wait-for graph, deadlock and safety analyses
//! - [`config`] - size [`config::Limits`] for graphs loaded from untrusted input
//! - [`utils::graph`] - generic directed-graph storage and cycle search
//! - [`Error`] and [`Result`] - error handling
//!
//! The graph is the only mutable state. Analyses borrow it immutably and return
//! fresh reports, so a report always describes the graph as it was when the
//! analysis ran.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: mutations and analysis results at
//! `debug`/`trace`, detected deadlocks and unsafe states at `warn`. Install any
//! `log` backend to see them.

mod error;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use allocgraph::prelude::*;
///
/// let graph = AllocationGraph::from_json("{}", &Limits::default())?;
/// assert!(evaluate_safety(&graph).is_safe());
/// # Ok::<(), allocgraph::Error>(())
/// ```
pub mod prelude;

pub mod analysis;
pub mod config;
pub mod model;
pub mod utils;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use allocgraph::{model::AllocationGraph, Result};
///
/// fn two_processes() -> Result<AllocationGraph> {
///     let mut graph = AllocationGraph::new();
///     graph.insert_process("worker")?;
///     graph.insert_process("writer")?;
///     Ok(graph)
/// }
/// assert_eq!(two_processes()?.node_count(), 2);
/// # Ok::<(), allocgraph::Error>(())
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `allocgraph` Error type
///
/// # Examples
///
/// ```rust
/// use allocgraph::{model::{AllocationGraph, EdgeKind}, EdgeViolation, Error};
///
/// let mut graph = AllocationGraph::classic_deadlock();
/// match graph.add_edge("P1", "R1", EdgeKind::Allocation) {
///     Err(Error::InvalidEdge { violation: EdgeViolation::RoleMismatch { .. }, .. }) => {}
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub use error::Error;

/// Why an edge was rejected. Carried by [`Error::InvalidEdge`].
pub use error::EdgeViolation;
