//! Banker's-algorithm safety evaluation.
//!
//! Demand is the current request matrix; there is no separate maximum-claim
//! matrix. A process can finish once every outstanding request fits into the
//! working pool, and finishing releases everything it holds. The comparison
//! covers every resource column, so while any resource is over-allocated no
//! process can finish.

use serde::Serialize;

use crate::{
    analysis::matrix::{allocation_matrix, availability, request_matrix, Matrix},
    model::AllocationGraph,
};

/// Outcome of [`evaluate_safety`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SafetyReport {
    /// Every process can finish in `sequence` order.
    Safe {
        /// Processes in the order they finish
        sequence: Vec<String>,
    },
    /// Some processes can never be satisfied.
    Unsafe {
        /// Processes that could finish before the scan stalled
        finished: Vec<String>,
        /// Processes whose demand can never be met
        blocked: Vec<String>,
    },
}

impl SafetyReport {
    /// Returns `true` for a safe state.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        matches!(self, SafetyReport::Safe { .. })
    }

    /// Returns the safe sequence, or `None` for an unsafe state.
    #[must_use]
    pub fn sequence(&self) -> Option<&[String]> {
        match self {
            SafetyReport::Safe { sequence } => Some(sequence),
            SafetyReport::Unsafe { .. } => None,
        }
    }

    /// Returns the processes that can never finish; empty for a safe state.
    #[must_use]
    pub fn blocked(&self) -> &[String] {
        match self {
            SafetyReport::Safe { .. } => &[],
            SafetyReport::Unsafe { blocked, .. } => blocked,
        }
    }
}

/// The matrices the evaluator works on, captured once per call.
struct Ledger {
    allocation: Matrix,
    request: Matrix,
    available: Vec<i64>,
}

impl Ledger {
    fn capture(graph: &AllocationGraph) -> Self {
        Ledger {
            allocation: allocation_matrix(graph),
            request: request_matrix(graph),
            available: availability(graph).as_slice().to_vec(),
        }
    }

    fn fits(&self, process: usize, work: &[i64]) -> bool {
        self.request
            .row_at(process)
            .iter()
            .zip(work)
            .all(|(&need, &free)| i64::from(need) <= free)
    }

    fn release(&self, process: usize, work: &mut [i64]) {
        for (free, &held) in work.iter_mut().zip(self.allocation.row_at(process)) {
            *free += i64::from(held);
        }
    }
}

/// Runs the Banker's safety algorithm.
///
/// The working pool starts at the current availability. Processes are scanned in
/// declaration order; the first unfinished one whose request fits the pool
/// finishes, returns its allocations to the pool, and the scan restarts from the
/// first process. The state is safe once every process finished, unsafe when a
/// full scan makes no progress.
///
/// An empty graph is safe with an empty sequence.
///
/// # Examples
///
/// ```rust
/// use allocgraph::{analysis::evaluate_safety, model::AllocationGraph};
///
/// let mut graph = AllocationGraph::classic_deadlock();
/// assert!(!evaluate_safety(&graph).is_safe());
///
/// graph.remove_edge("e4")?;
/// let report = evaluate_safety(&graph);
/// assert_eq!(report.sequence(), Some(&["P2".to_string(), "P1".to_string()][..]));
/// # Ok::<(), allocgraph::Error>(())
/// ```
#[must_use]
pub fn evaluate_safety(graph: &AllocationGraph) -> SafetyReport {
    let ledger = Ledger::capture(graph);
    let processes = ledger.request.processes();

    let mut work = ledger.available.clone();
    let mut finished = vec![false; processes.len()];
    let mut sequence = Vec::with_capacity(processes.len());

    while let Some(next) =
        (0..processes.len()).find(|&p| !finished[p] && ledger.fits(p, &work))
    {
        finished[next] = true;
        ledger.release(next, &mut work);
        sequence.push(processes[next].clone());
        log::trace!("{} can finish, work now {:?}", processes[next], work);
    }

    if sequence.len() == processes.len() {
        log::debug!("safe sequence: {}", sequence.join(" -> "));
        SafetyReport::Safe { sequence }
    } else {
        let blocked: Vec<String> = processes
            .iter()
            .zip(&finished)
            .filter(|(_, &done)| !done)
            .map(|(id, _)| id.clone())
            .collect();
        log::warn!("unsafe state: {} cannot finish", blocked.join(", "));
        SafetyReport::Unsafe {
            finished: sequence,
            blocked,
        }
    }
}

/// Replays `sequence` and reports whether it proves the graph safe.
///
/// The sequence must name every process exactly once; each process's request
/// must fit the pool before its allocations are released.
#[must_use]
pub fn is_safe_sequence<S: AsRef<str>>(graph: &AllocationGraph, sequence: &[S]) -> bool {
    let ledger = Ledger::capture(graph);
    let processes = ledger.request.processes();
    if sequence.len() != processes.len() {
        return false;
    }

    let mut work = ledger.available.clone();
    let mut finished = vec![false; processes.len()];
    for step in sequence {
        let Some(p) = processes.iter().position(|id| id == step.as_ref()) else {
            return false;
        };
        if finished[p] || !ledger.fits(p, &work) {
            return false;
        }
        finished[p] = true;
        ledger.release(p, &mut work);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EdgeKind;

    #[test]
    fn test_classic_deadlock_is_unsafe() {
        let report = evaluate_safety(&AllocationGraph::classic_deadlock());
        assert!(!report.is_safe());
        assert_eq!(report.sequence(), None);
        assert_eq!(report.blocked(), &["P1", "P2"]);
    }

    #[test]
    fn test_broken_cycle_is_safe() {
        let mut graph = AllocationGraph::classic_deadlock();
        graph.remove_edge("e4").unwrap();

        let report = evaluate_safety(&graph);
        assert!(report.is_safe());
        let sequence = report.sequence().unwrap();
        assert_eq!(sequence, &["P2", "P1"]);
        assert!(is_safe_sequence(&graph, sequence));
    }

    #[test]
    fn test_shared_resource_is_safe() {
        let mut graph = AllocationGraph::new();
        let p1 = graph.add_process();
        let p2 = graph.add_process();
        let r1 = graph.add_resource(2);
        graph.add_edge(&r1, &p1, EdgeKind::Allocation).unwrap();
        graph.add_edge(&r1, &p2, EdgeKind::Allocation).unwrap();

        let report = evaluate_safety(&graph);
        assert_eq!(report.sequence(), Some(&[p1, p2][..]));
    }

    #[test]
    fn test_scan_restarts_from_first_process() {
        let mut graph = AllocationGraph::new();
        let p1 = graph.add_process();
        let p2 = graph.add_process();
        let p3 = graph.add_process();
        let r1 = graph.add_resource(1);
        // P1 waits for R1 held by P2; P3 is free to go.
        graph.add_edge(&r1, &p2, EdgeKind::Allocation).unwrap();
        graph.add_edge(&p1, &r1, EdgeKind::Request).unwrap();

        let report = evaluate_safety(&graph);
        // P2 finishes first and releases R1, then the scan restarts at P1.
        assert_eq!(report.sequence(), Some(&[p2, p1, p3][..]));
    }

    #[test]
    fn test_partial_progress_reported() {
        let mut graph = AllocationGraph::classic_deadlock();
        let p3 = graph.add_process();
        let report = evaluate_safety(&graph);
        match report {
            SafetyReport::Unsafe { finished, blocked } => {
                assert_eq!(finished, vec![p3]);
                assert_eq!(blocked, vec!["P1", "P2"]);
            }
            SafetyReport::Safe { .. } => panic!("expected unsafe state"),
        }
    }

    #[test]
    fn test_over_allocated_resource_stalls() {
        let mut graph = AllocationGraph::new();
        let p1 = graph.add_process();
        let p2 = graph.add_process();
        let r1 = graph.add_resource(1);
        graph.add_edge(&r1, &p1, EdgeKind::Allocation).unwrap();
        graph.add_edge(&r1, &p1, EdgeKind::Allocation).unwrap();
        graph.add_edge(&p2, &r1, EdgeKind::Request).unwrap();

        // available = -1, so not even a zero request fits
        let report = evaluate_safety(&graph);
        assert_eq!(report.blocked(), &[p1, p2]);
    }

    #[test]
    fn test_empty_graph_is_safe() {
        let report = evaluate_safety(&AllocationGraph::new());
        assert_eq!(report.sequence(), Some(&[][..]));
    }

    #[test]
    fn test_replay_rejects_bad_sequences() {
        let mut graph = AllocationGraph::classic_deadlock();
        graph.remove_edge("e4").unwrap();

        assert!(!is_safe_sequence(&graph, &["P1", "P2"]));
        assert!(!is_safe_sequence(&graph, &["P2"]));
        assert!(!is_safe_sequence(&graph, &["P2", "P2"]));
        assert!(!is_safe_sequence(&graph, &["P2", "P9"]));
        assert!(is_safe_sequence(&graph, &["P2", "P1"]));
    }

    #[test]
    fn test_idempotent() {
        let graph = AllocationGraph::classic_deadlock();
        assert_eq!(evaluate_safety(&graph), evaluate_safety(&graph));
    }

    #[test]
    fn test_serialized_shape() {
        let report = evaluate_safety(&AllocationGraph::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["state"], "safe");
        assert!(json["sequence"].as_array().unwrap().is_empty());
    }
}
