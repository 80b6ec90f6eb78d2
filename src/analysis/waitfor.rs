//! Wait-for graph derived from an allocation graph.
//!
//! `P → P′` means process `P` requests a resource of which `P′` holds an
//! instance. Each wait-for edge remembers the request/allocation edge pairs
//! that produced it, so a cycle over processes can be mapped back onto the
//! edges of the allocation graph it was derived from.

use std::collections::HashMap;

use crate::{
    model::AllocationGraph,
    utils::graph::{DirectedGraph, GraphBase, NodeId, Successors},
};

/// One request/allocation pair backing a wait-for edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitCause {
    /// Id of the request edge `P → R`
    pub request: String,
    /// Id of the resource `R`
    pub resource: String,
    /// Id of the allocation edge `R → P′`
    pub allocation: String,
}

/// Process-level wait-for graph.
///
/// Nodes are the processes of the source graph in declaration order. Each
/// `(P, P′)` pair appears at most once; its position among `P`'s successors is
/// the position of its first discovery when walking request edges and then
/// allocation edges in declaration order.
#[derive(Debug, Clone)]
pub struct WaitForGraph {
    graph: DirectedGraph<String, Vec<WaitCause>>,
}

impl WaitForGraph {
    /// Derives the wait-for graph of `source`.
    #[must_use]
    pub fn build(source: &AllocationGraph) -> Self {
        let mut graph: DirectedGraph<String, Vec<WaitCause>> = DirectedGraph::new();
        let mut index: HashMap<&str, NodeId> = HashMap::new();
        for process in source.processes() {
            index.insert(process, graph.add_node(process.to_string()));
        }

        for request in source.edges().filter(|e| e.is_request()) {
            let Some(&waiter) = index.get(request.from.as_str()) else {
                continue;
            };
            for allocation in source
                .edges()
                .filter(|e| e.is_allocation() && e.from == request.to)
            {
                if allocation.to == request.from {
                    continue;
                }
                let Some(&holder) = index.get(allocation.to.as_str()) else {
                    continue;
                };

                let cause = WaitCause {
                    request: request.id.clone(),
                    resource: request.to.clone(),
                    allocation: allocation.id.clone(),
                };
                match graph.find_edge(waiter, holder) {
                    Some(existing) => {
                        if let Some(causes) = graph.edge_data_mut(existing) {
                            causes.push(cause);
                        }
                    }
                    None => {
                        graph.add_edge(waiter, holder, vec![cause]);
                    }
                }
            }
        }

        log::trace!(
            "wait-for graph: {} processes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        WaitForGraph { graph }
    }

    /// Returns the process id of `node`.
    #[must_use]
    pub fn process(&self, node: NodeId) -> Option<&str> {
        self.graph.node(node).map(String::as_str)
    }

    /// Returns the node of `process`, if it exists.
    #[must_use]
    pub fn node_of(&self, process: &str) -> Option<NodeId> {
        self.graph
            .nodes()
            .find(|(_, id)| id.as_str() == process)
            .map(|(node, _)| node)
    }

    /// Returns the edge pairs that make `from` wait for `to`.
    ///
    /// Empty when `from` does not wait for `to`.
    #[must_use]
    pub fn causes(&self, from: NodeId, to: NodeId) -> &[WaitCause] {
        self.graph
            .find_edge(from, to)
            .and_then(|edge| self.graph.edge_data(edge))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the processes `process` waits for, in discovery order.
    #[must_use]
    pub fn waits_for(&self, process: &str) -> Vec<&str> {
        let Some(node) = self.node_of(process) else {
            return Vec::new();
        };
        self.graph
            .successors(node)
            .filter_map(|succ| self.process(succ))
            .collect()
    }

    /// Returns the number of wait-for edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl GraphBase for WaitForGraph {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.graph.node_ids()
    }
}

impl Successors for WaitForGraph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.successors(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EdgeKind;

    #[test]
    fn test_classic_deadlock_waits() {
        let wfg = WaitForGraph::build(&AllocationGraph::classic_deadlock());
        assert_eq!(wfg.waits_for("P1"), vec!["P2"]);
        assert_eq!(wfg.waits_for("P2"), vec!["P1"]);
        assert_eq!(wfg.edge_count(), 2);

        let p1 = wfg.node_of("P1").unwrap();
        let p2 = wfg.node_of("P2").unwrap();
        assert_eq!(
            wfg.causes(p1, p2),
            &[WaitCause {
                request: "e2".into(),
                resource: "R2".into(),
                allocation: "e3".into(),
            }]
        );
    }

    #[test]
    fn test_each_holder_contributes() {
        let mut graph = AllocationGraph::new();
        let p1 = graph.add_process();
        let p2 = graph.add_process();
        let p3 = graph.add_process();
        let r1 = graph.add_resource(2);
        graph.add_edge(&r1, &p3, EdgeKind::Allocation).unwrap();
        graph.add_edge(&r1, &p2, EdgeKind::Allocation).unwrap();
        graph.add_edge(&p1, &r1, EdgeKind::Request).unwrap();

        let wfg = WaitForGraph::build(&graph);
        assert_eq!(wfg.waits_for(&p1), vec!["P3", "P2"]);
        assert!(wfg.waits_for(&p2).is_empty());
    }

    #[test]
    fn test_repeated_pair_accumulates_causes() {
        let mut graph = AllocationGraph::new();
        let p1 = graph.add_process();
        let p2 = graph.add_process();
        let r1 = graph.add_resource(1);
        let r2 = graph.add_resource(1);
        graph.add_edge(&r1, &p2, EdgeKind::Allocation).unwrap();
        graph.add_edge(&r2, &p2, EdgeKind::Allocation).unwrap();
        graph.add_edge(&p1, &r1, EdgeKind::Request).unwrap();
        graph.add_edge(&p1, &r2, EdgeKind::Request).unwrap();

        let wfg = WaitForGraph::build(&graph);
        assert_eq!(wfg.edge_count(), 1);
        let causes = wfg.causes(wfg.node_of(&p1).unwrap(), wfg.node_of(&p2).unwrap());
        let requests: Vec<&str> = causes.iter().map(|c| c.request.as_str()).collect();
        assert_eq!(requests, vec!["e3", "e4"]);
    }

    #[test]
    fn test_own_allocation_is_not_a_wait() {
        let mut graph = AllocationGraph::new();
        let p1 = graph.add_process();
        let r1 = graph.add_resource(2);
        graph.add_edge(&r1, &p1, EdgeKind::Allocation).unwrap();
        graph.add_edge(&p1, &r1, EdgeKind::Request).unwrap();

        let wfg = WaitForGraph::build(&graph);
        assert_eq!(wfg.edge_count(), 0);
    }

    #[test]
    fn test_unknown_process() {
        let wfg = WaitForGraph::build(&AllocationGraph::classic_deadlock());
        assert!(wfg.node_of("P9").is_none());
        assert!(wfg.waits_for("R1").is_empty());
    }
}
