//! Cycle detection for directed graphs.
//!
//! The search is an iterative depth-first traversal with an explicit stack of
//! frames and two per-node tables: `visited` (ever entered) and `on_path` (on the
//! current root-to-node path). It visits successors in exactly the order the
//! recursive formulation would, so the first cycle reported is the same one a
//! recursive DFS would report, without being bounded by the call stack.
//!
//! A reported cycle is the slice of the current path from the node that closed it
//! through the node whose edge closed it. The closing edge runs from the last
//! element back to the first; the first node is not repeated at the end.

use crate::utils::graph::{NodeId, Successors};

/// One level of the explicit DFS stack.
struct Frame {
    node: NodeId,
    successors: Vec<NodeId>,
    cursor: usize,
}

impl Frame {
    fn new<G: Successors>(graph: &G, node: NodeId) -> Self {
        Frame {
            node,
            successors: graph.successors(node).collect(),
            cursor: 0,
        }
    }
}

/// DFS state shared across roots, so a node explored from one root is not
/// explored again from a later one.
struct CycleSearch {
    visited: Vec<bool>,
    on_path: Vec<bool>,
}

impl CycleSearch {
    fn new(node_count: usize) -> Self {
        CycleSearch {
            visited: vec![false; node_count],
            on_path: vec![false; node_count],
        }
    }

    fn enter(&mut self, node: NodeId) {
        self.visited[node.index()] = true;
        self.on_path[node.index()] = true;
    }

    /// Runs one DFS tree from `root` and returns the first cycle it closes.
    ///
    /// On-path marks of the tree are cleared before returning, whether or not a
    /// cycle was found.
    fn search_from<G: Successors>(&mut self, graph: &G, root: NodeId) -> Option<Vec<NodeId>> {
        if self.visited[root.index()] {
            return None;
        }

        self.enter(root);
        let mut stack = vec![Frame::new(graph, root)];
        let mut found = None;

        while let Some(frame) = stack.last_mut() {
            let Some(next) = frame.successors.get(frame.cursor).copied() else {
                self.on_path[frame.node.index()] = false;
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            if !self.visited[next.index()] {
                self.enter(next);
                stack.push(Frame::new(graph, next));
            } else if self.on_path[next.index()] {
                if let Some(start) = stack.iter().position(|f| f.node == next) {
                    found = Some(stack[start..].iter().map(|f| f.node).collect());
                }
                break;
            }
        }

        for frame in &stack {
            self.on_path[frame.node.index()] = false;
        }
        found
    }
}

/// Checks whether a cycle is reachable from `start`.
///
/// Returns `false` for an out-of-range start node.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn has_cycle<G: Successors>(graph: &G, start: NodeId) -> bool {
    find_cycle(graph, start).is_some()
}

/// Finds the first cycle reachable from `start`, if any.
///
/// # Examples
///
/// ```rust
/// use allocgraph::utils::graph::{algorithms::find_cycle, DirectedGraph};
///
/// let mut graph: DirectedGraph<char, ()> = DirectedGraph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// graph.add_edge(a, b, ());
/// graph.add_edge(b, c, ());
/// graph.add_edge(c, b, ());
///
/// assert_eq!(find_cycle(&graph, a), Some(vec![b, c]));
/// ```
pub fn find_cycle<G: Successors>(graph: &G, start: NodeId) -> Option<Vec<NodeId>> {
    let node_count = graph.node_count();
    if start.index() >= node_count {
        return None;
    }

    CycleSearch::new(node_count).search_from(graph, start)
}

/// Runs a DFS from every not-yet-visited node, in node order, and collects the
/// first cycle of each DFS tree.
///
/// This answers "does the graph contain a cycle, and which nodes are on one",
/// not "enumerate every cycle": a tree stops at its first cycle and nodes it
/// already visited are never used as roots again.
pub fn find_cycles<G: Successors>(graph: &G) -> Vec<Vec<NodeId>> {
    let mut search = CycleSearch::new(graph.node_count());
    graph
        .node_ids()
        .filter_map(|root| search.search_from(graph, root))
        .collect()
}
