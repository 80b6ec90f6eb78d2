//! The mutable resource-allocation graph.

use crate::{
    error::EdgeViolation,
    model::{Edge, EdgeKind, Node},
    Error, Result,
};

/// A resource-allocation graph: processes, resources, and the request and
/// allocation edges between them.
///
/// This is the only mutable structure in the crate. Every mutation goes through
/// the methods below, which enforce the structural invariants:
///
/// - node ids are unique across processes and resources
/// - request edges run process → resource, allocation edges resource → process
/// - edges never form self-loops and never dangle
/// - resource capacity is at least 1
///
/// Nodes and edges are kept in declaration order. That order is observable: the
/// deadlock detector roots its searches in process order and the safety evaluator
/// scans processes in that order.
///
/// Analyses take `&AllocationGraph` and return fresh reports; nothing is cached,
/// so a report describes the graph as it was when it was computed. The graph is
/// sized for interactive use (tens of nodes) and uses linear lookups.
///
/// # Examples
///
/// ```rust
/// use allocgraph::{analysis, model::{AllocationGraph, EdgeKind}};
///
/// let mut graph = AllocationGraph::new();
/// let p1 = graph.add_process();
/// let r1 = graph.add_resource(1);
/// graph.add_edge(&r1, &p1, EdgeKind::Allocation)?;
///
/// assert!(analysis::detect_deadlock(&graph).is_empty());
/// assert!(analysis::evaluate_safety(&graph).is_safe());
/// # Ok::<(), allocgraph::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    process_counter: usize,
    resource_counter: usize,
    edge_counter: usize,
}

impl AllocationGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The textbook two-process deadlock.
    ///
    /// `P1` holds `R1` and requests `R2`; `P2` holds `R2` and requests `R1`. Both
    /// resources have a single instance. Edge ids are `e1`..`e4` in that order.
    #[must_use]
    pub fn classic_deadlock() -> Self {
        let process = |id: &str| Node::Process { id: id.to_string() };
        let resource = |id: &str| Node::Resource {
            id: id.to_string(),
            instances: 1,
        };
        let edge = |id: &str, from: &str, to: &str, kind| Edge {
            id: id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            kind,
        };

        AllocationGraph {
            nodes: vec![process("P1"), process("P2"), resource("R1"), resource("R2")],
            edges: vec![
                edge("e1", "R1", "P1", EdgeKind::Allocation),
                edge("e2", "P1", "R2", EdgeKind::Request),
                edge("e3", "R2", "P2", EdgeKind::Allocation),
                edge("e4", "P2", "R1", EdgeKind::Request),
            ],
            process_counter: 2,
            resource_counter: 2,
            edge_counter: 4,
        }
    }

    /// Adds a process under the next free `P<n>` id and returns the id.
    pub fn add_process(&mut self) -> String {
        let nodes = &self.nodes;
        let id = Self::next_free(&mut self.process_counter, "P", |id| {
            nodes.iter().any(|n| n.id() == id)
        });
        log::debug!("added process {id}");
        self.nodes.push(Node::Process { id: id.clone() });
        id
    }

    /// Adds a resource under the next free `R<n>` id and returns the id.
    ///
    /// `instances` is clamped to a minimum of 1.
    pub fn add_resource(&mut self, instances: u32) -> String {
        let nodes = &self.nodes;
        let id = Self::next_free(&mut self.resource_counter, "R", |id| {
            nodes.iter().any(|n| n.id() == id)
        });
        let instances = instances.max(1);
        log::debug!("added resource {id} with {instances} instance(s)");
        self.nodes.push(Node::Resource {
            id: id.clone(),
            instances,
        });
        id
    }

    /// Adds a process under a caller-chosen id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if a node with this id already exists.
    pub fn insert_process(&mut self, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        self.ensure_node_free(&id)?;
        log::debug!("inserted process {id}");
        self.nodes.push(Node::Process { id });
        Ok(())
    }

    /// Adds a resource under a caller-chosen id; `instances` is clamped to at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if a node with this id already exists.
    pub fn insert_resource(&mut self, id: impl Into<String>, instances: u32) -> Result<()> {
        let id = id.into();
        self.ensure_node_free(&id)?;
        let instances = instances.max(1);
        log::debug!("inserted resource {id} with {instances} instance(s)");
        self.nodes.push(Node::Resource { id, instances });
        Ok(())
    }

    /// Removes a node together with every edge touching it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no node has this id.
    pub fn remove_node(&mut self, id: &str) -> Result<Node> {
        let position = self.find_node(id).ok_or_else(|| Error::NotFound {
            what: "node",
            id: id.to_string(),
        })?;

        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(id));
        log::debug!(
            "removed node {id} and {} incident edge(s)",
            before - self.edges.len()
        );
        Ok(self.nodes.remove(position))
    }

    /// Adds an edge under the next free `e<n>` id and returns the id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEdge`] if an endpoint does not exist, the edge is a
    /// self-loop, or the endpoint kinds do not match `kind`. The graph is unchanged.
    pub fn add_edge(&mut self, from: &str, to: &str, kind: EdgeKind) -> Result<String> {
        self.validate_edge(from, to, kind)?;
        let edges = &self.edges;
        let id = Self::next_free(&mut self.edge_counter, "e", |id| {
            edges.iter().any(|e| e.id == id)
        });
        self.push_edge(id.clone(), from, to, kind);
        Ok(id)
    }

    /// Adds an edge under a caller-chosen id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateEdge`] if the id is taken, otherwise the same
    /// errors as [`add_edge`](Self::add_edge).
    pub fn insert_edge(
        &mut self,
        id: impl Into<String>,
        from: &str,
        to: &str,
        kind: EdgeKind,
    ) -> Result<()> {
        let id = id.into();
        if self.find_edge(&id).is_some() {
            return Err(Error::DuplicateEdge(id));
        }
        self.validate_edge(from, to, kind)?;
        self.push_edge(id, from, to, kind);
        Ok(())
    }

    /// Removes an edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no edge has this id.
    pub fn remove_edge(&mut self, id: &str) -> Result<Edge> {
        let position = self.find_edge(id).ok_or_else(|| Error::NotFound {
            what: "edge",
            id: id.to_string(),
        })?;
        let edge = self.edges.remove(position);
        log::debug!(
            "removed {} edge {} ({} -> {})",
            edge.kind,
            edge.id,
            edge.from,
            edge.to
        );
        Ok(edge)
    }

    /// Sets the capacity of a resource and returns the value stored.
    ///
    /// Capacity is normalized rather than validated: `n` below 1 becomes 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `id` does not name a resource.
    pub fn set_instances(&mut self, id: &str, n: i64) -> Result<u32> {
        let slot = self.resource_capacity_mut(id)?;
        let clamped = clamp_instances(n);
        *slot = clamped;
        log::debug!("updated {id} instances to {clamped}");
        Ok(clamped)
    }

    /// Changes the capacity of a resource by `delta`, with the same clamping as
    /// [`set_instances`](Self::set_instances).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `id` does not name a resource.
    pub fn adjust_instances(&mut self, id: &str, delta: i64) -> Result<u32> {
        let current = i64::from(*self.resource_capacity_mut(id)?);
        self.set_instances(id, current.saturating_add(delta))
    }

    /// Returns the node with this id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.find_node(id).map(|i| &self.nodes[i])
    }

    /// Returns the edge with this id.
    #[must_use]
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.find_edge(id).map(|i| &self.edges[i])
    }

    /// Returns all nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Returns all edges in declaration order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Returns process ids in declaration order.
    pub fn processes(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().filter(|n| n.is_process()).map(Node::id)
    }

    /// Returns `(id, instances)` of every resource in declaration order.
    pub fn resources(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            Node::Resource { id, instances } => Some((id.as_str(), *instances)),
            Node::Process { .. } => None,
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if a node has this id.
    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.find_node(id).is_some()
    }

    /// Returns `true` if an edge has this id.
    #[must_use]
    pub fn contains_edge(&self, id: &str) -> bool {
        self.find_edge(id).is_some()
    }

    fn find_node(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id() == id)
    }

    fn find_edge(&self, id: &str) -> Option<usize> {
        self.edges.iter().position(|e| e.id == id)
    }

    fn ensure_node_free(&self, id: &str) -> Result<()> {
        if self.contains_node(id) {
            return Err(Error::DuplicateNode(id.to_string()));
        }
        Ok(())
    }

    fn resource_capacity_mut(&mut self, id: &str) -> Result<&mut u32> {
        self.nodes
            .iter_mut()
            .find_map(|node| match node {
                Node::Resource {
                    id: node_id,
                    instances,
                } if node_id.as_str() == id => Some(instances),
                _ => None,
            })
            .ok_or_else(|| Error::NotFound {
                what: "resource",
                id: id.to_string(),
            })
    }

    /// Advances `counter` until `<prefix><counter>` is not taken.
    fn next_free(counter: &mut usize, prefix: &str, taken: impl Fn(&str) -> bool) -> String {
        loop {
            *counter += 1;
            let candidate = format!("{prefix}{counter}");
            if !taken(&candidate) {
                return candidate;
            }
        }
    }

    fn validate_edge(&self, from: &str, to: &str, kind: EdgeKind) -> Result<()> {
        let reject = |violation| Error::InvalidEdge {
            from: from.to_string(),
            to: to.to_string(),
            kind,
            violation,
        };

        let from_kind = self
            .node(from)
            .map(Node::kind)
            .ok_or_else(|| reject(EdgeViolation::DanglingEndpoint(from.to_string())))?;
        let to_kind = self
            .node(to)
            .map(Node::kind)
            .ok_or_else(|| reject(EdgeViolation::DanglingEndpoint(to.to_string())))?;

        if from == to {
            return Err(reject(EdgeViolation::SelfLoop));
        }
        if kind.endpoints() != (from_kind, to_kind) {
            return Err(reject(EdgeViolation::RoleMismatch {
                from: from_kind,
                to: to_kind,
            }));
        }
        Ok(())
    }

    fn push_edge(&mut self, id: String, from: &str, to: &str, kind: EdgeKind) {
        log::debug!("added {kind} edge {id} ({from} -> {to})");
        self.edges.push(Edge {
            id,
            from: from.to_string(),
            to: to.to_string(),
            kind,
        });
    }
}

/// Normalizes a requested capacity into `1..=u32::MAX`.
pub(crate) fn clamp_instances(n: i64) -> u32 {
    u32::try_from(n.max(1)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;

    #[test]
    fn test_generated_ids() {
        let mut graph = AllocationGraph::new();
        assert_eq!(graph.add_process(), "P1");
        assert_eq!(graph.add_process(), "P2");
        assert_eq!(graph.add_resource(2), "R1");
        assert_eq!(graph.add_edge("P1", "R1", EdgeKind::Request).unwrap(), "e1");
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_generated_ids_skip_taken() {
        let mut graph = AllocationGraph::new();
        graph.insert_process("P1").unwrap();
        graph.insert_resource("P2", 1).unwrap();

        assert_eq!(graph.add_process(), "P3");
        graph.insert_edge("e1", "P3", "P2", EdgeKind::Request).unwrap();
        assert_eq!(graph.add_edge("P1", "P2", EdgeKind::Request).unwrap(), "e2");
    }

    #[test]
    fn test_generated_ids_never_reused_after_removal() {
        let mut graph = AllocationGraph::new();
        let p1 = graph.add_process();
        graph.remove_node(&p1).unwrap();
        assert_eq!(graph.add_process(), "P2");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut graph = AllocationGraph::new();
        graph.insert_process("X").unwrap();

        assert!(matches!(
            graph.insert_resource("X", 1),
            Err(Error::DuplicateNode(id)) if id == "X"
        ));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let mut graph = AllocationGraph::classic_deadlock();

        assert!(matches!(
            graph.insert_edge("e1", "P1", "R1", EdgeKind::Request),
            Err(Error::DuplicateEdge(id)) if id == "e1"
        ));
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edge("e1").map(|e| e.kind), Some(EdgeKind::Allocation));
    }

    #[test]
    fn test_resource_capacity_clamped_on_creation() {
        let mut graph = AllocationGraph::new();
        let r = graph.add_resource(0);
        assert_eq!(graph.node(&r).and_then(Node::instances), Some(1));
    }

    #[test]
    fn test_add_edge_role_mismatch() {
        let mut graph = AllocationGraph::new();
        let p = graph.add_process();
        let r = graph.add_resource(1);

        let err = graph.add_edge(&r, &p, EdgeKind::Request).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEdge {
                violation: EdgeViolation::RoleMismatch {
                    from: NodeKind::Resource,
                    to: NodeKind::Process
                },
                ..
            }
        ));

        let err = graph.add_edge(&p, &r, EdgeKind::Allocation).unwrap_err();
        assert!(matches!(err, Error::InvalidEdge { .. }));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_between_processes_rejected() {
        let mut graph = AllocationGraph::new();
        let p1 = graph.add_process();
        let p2 = graph.add_process();

        for kind in [EdgeKind::Request, EdgeKind::Allocation] {
            assert!(matches!(
                graph.add_edge(&p1, &p2, kind),
                Err(Error::InvalidEdge { .. })
            ));
        }
    }

    #[test]
    fn test_add_edge_self_loop() {
        let mut graph = AllocationGraph::new();
        let p = graph.add_process();

        let err = graph.add_edge(&p, &p, EdgeKind::Request).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEdge {
                violation: EdgeViolation::SelfLoop,
                ..
            }
        ));
    }

    #[test]
    fn test_add_edge_dangling() {
        let mut graph = AllocationGraph::new();
        let p = graph.add_process();

        let err = graph.add_edge(&p, "R9", EdgeKind::Request).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEdge {
                violation: EdgeViolation::DanglingEndpoint(ref id),
                ..
            } if id == "R9"
        ));
    }

    #[test]
    fn test_parallel_edges_allowed() {
        let mut graph = AllocationGraph::new();
        let p = graph.add_process();
        let r = graph.add_resource(3);

        let e1 = graph.add_edge(&r, &p, EdgeKind::Allocation).unwrap();
        let e2 = graph.add_edge(&r, &p, EdgeKind::Allocation).unwrap();
        assert_ne!(e1, e2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        let mut graph = AllocationGraph::classic_deadlock();
        let removed = graph.remove_node("R1").unwrap();

        assert_eq!(removed.kind(), NodeKind::Resource);
        assert!(!graph.contains_node("R1"));
        assert!(graph.edges().all(|e| !e.touches("R1")));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_remove_missing() {
        let mut graph = AllocationGraph::new();
        assert!(matches!(
            graph.remove_node("P1"),
            Err(Error::NotFound { what: "node", .. })
        ));
        assert!(matches!(
            graph.remove_edge("e1"),
            Err(Error::NotFound { what: "edge", .. })
        ));
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = AllocationGraph::classic_deadlock();
        let edge = graph.remove_edge("e4").unwrap();

        assert_eq!(edge.from, "P2");
        assert_eq!(edge.to, "R1");
        assert!(!graph.contains_edge("e4"));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_set_instances_clamps() {
        let mut graph = AllocationGraph::new();
        let r = graph.add_resource(2);

        assert_eq!(graph.set_instances(&r, 5).unwrap(), 5);
        assert_eq!(graph.set_instances(&r, 0).unwrap(), 1);
        assert_eq!(graph.set_instances(&r, -7).unwrap(), 1);
        assert_eq!(graph.node(&r).and_then(Node::instances), Some(1));
    }

    #[test]
    fn test_adjust_instances() {
        let mut graph = AllocationGraph::new();
        let r = graph.add_resource(1);

        assert_eq!(graph.adjust_instances(&r, 2).unwrap(), 3);
        assert_eq!(graph.adjust_instances(&r, -1).unwrap(), 2);
        assert_eq!(graph.adjust_instances(&r, -10).unwrap(), 1);
    }

    #[test]
    fn test_set_instances_on_process_is_not_found() {
        let mut graph = AllocationGraph::new();
        let p = graph.add_process();

        assert!(matches!(
            graph.set_instances(&p, 3),
            Err(Error::NotFound {
                what: "resource",
                ..
            })
        ));
    }

    #[test]
    fn test_classic_deadlock_shape() {
        let graph = AllocationGraph::classic_deadlock();

        assert_eq!(graph.processes().collect::<Vec<_>>(), vec!["P1", "P2"]);
        assert_eq!(
            graph.resources().collect::<Vec<_>>(),
            vec![("R1", 1), ("R2", 1)]
        );
        let e1 = graph.edge("e1").unwrap();
        assert_eq!((e1.from.as_str(), e1.to.as_str()), ("R1", "P1"));
        assert_eq!(e1.kind, EdgeKind::Allocation);
        assert_eq!(graph.edge("e4").unwrap().kind, EdgeKind::Request);
    }
}
