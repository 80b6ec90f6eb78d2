//! Deadlock detection over the wait-for graph.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    analysis::waitfor::WaitForGraph,
    model::AllocationGraph,
    utils::graph::{algorithms::find_cycles, GraphBase},
};

/// Processes and edges that participate in a wait-for cycle.
///
/// `nodes` and `edges` are de-duplicated unions over all reported cycles, in
/// first-seen order. `cycles` keeps each cycle as found: a process list whose
/// last element waits for the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeadlockReport {
    /// Deadlocked process ids
    pub nodes: Vec<String>,
    /// Ids of the request and allocation edges that close the cycles
    pub edges: Vec<String>,
    /// One cycle per depth-first tree that contained one
    pub cycles: Vec<Vec<String>>,
}

impl DeadlockReport {
    /// Returns `true` if no deadlock was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if at least one deadlock was found.
    #[must_use]
    pub fn is_deadlocked(&self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` if `process` is deadlocked.
    #[must_use]
    pub fn contains_node(&self, process: &str) -> bool {
        self.nodes.iter().any(|id| id == process)
    }

    /// Returns `true` if the edge `edge` is part of a reported cycle.
    #[must_use]
    pub fn contains_edge(&self, edge: &str) -> bool {
        self.edges.iter().any(|id| id == edge)
    }
}

/// Ordered set builder for report id lists.
#[derive(Default)]
struct Collector {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl Collector {
    fn push(&mut self, id: &str) {
        if self.seen.insert(id.to_string()) {
            self.items.push(id.to_string());
        }
    }
}

/// Detects deadlocked processes.
///
/// Builds the wait-for graph, runs a depth-first search from every unvisited
/// process in declaration order and keeps the first cycle of each search tree.
/// Every step `P → P′` of a cycle, including the step from the last process
/// back to the first, is mapped back to all request/allocation edge pairs that
/// make `P` wait for `P′`.
///
/// The empty graph and any graph whose wait-for graph is acyclic yield an empty
/// report.
///
/// # Examples
///
/// ```rust
/// use allocgraph::{analysis::detect_deadlock, model::AllocationGraph};
///
/// let report = detect_deadlock(&AllocationGraph::classic_deadlock());
/// assert_eq!(report.nodes, vec!["P1", "P2"]);
/// assert_eq!(report.edges, vec!["e2", "e3", "e4", "e1"]);
/// ```
#[must_use]
pub fn detect_deadlock(graph: &AllocationGraph) -> DeadlockReport {
    let wfg = WaitForGraph::build(graph);

    let mut nodes = Collector::default();
    let mut edges = Collector::default();
    let mut cycles = Vec::new();

    for cycle in find_cycles(&wfg) {
        let steps = cycle.iter().zip(cycle.iter().cycle().skip(1));
        for (&from, &to) in steps {
            for cause in wfg.causes(from, to) {
                edges.push(&cause.request);
                edges.push(&cause.allocation);
            }
        }

        let processes: Vec<String> = cycle
            .iter()
            .filter_map(|&node| wfg.process(node))
            .map(str::to_string)
            .collect();
        for process in &processes {
            nodes.push(process);
        }
        cycles.push(processes);
    }

    let report = DeadlockReport {
        nodes: nodes.items,
        edges: edges.items,
        cycles,
    };
    if report.is_deadlocked() {
        log::warn!(
            "deadlock: {} processes in {} cycle(s): {}",
            report.nodes.len(),
            report.cycles.len(),
            report.nodes.join(", ")
        );
    } else {
        log::debug!("no deadlock among {} processes", wfg.node_count());
    }
    report
}
