//! Allocation, request and availability projections.
//!
//! Every projection is recomputed from the graph on each call. Tables are dense:
//! rows follow process declaration order and columns follow resource declaration
//! order. Lookups by id return zero for ids the table does not know.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{AllocationGraph, EdgeKind};

/// A process × resource table of edge counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matrix {
    processes: Vec<String>,
    resources: Vec<String>,
    rows: Vec<Vec<u32>>,
}

impl Matrix {
    fn count(graph: &AllocationGraph, kind: EdgeKind) -> Self {
        let processes: Vec<String> = graph.processes().map(str::to_string).collect();
        let resources: Vec<String> = graph.resources().map(|(id, _)| id.to_string()).collect();

        let process_index: HashMap<&str, usize> = processes
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();
        let resource_index: HashMap<&str, usize> = resources
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();

        let mut rows = vec![vec![0u32; resources.len()]; processes.len()];
        for edge in graph.edges().filter(|e| e.kind == kind) {
            let (process, resource) = match kind {
                EdgeKind::Request => (&edge.from, &edge.to),
                EdgeKind::Allocation => (&edge.to, &edge.from),
            };
            if let (Some(&p), Some(&r)) = (
                process_index.get(process.as_str()),
                resource_index.get(resource.as_str()),
            ) {
                rows[p][r] += 1;
            }
        }

        Matrix {
            processes,
            resources,
            rows,
        }
    }

    /// Process ids labelling the rows.
    #[must_use]
    pub fn processes(&self) -> &[String] {
        &self.processes
    }

    /// Resource ids labelling the columns.
    #[must_use]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Returns the count for `(process, resource)`, zero for unknown ids.
    #[must_use]
    pub fn get(&self, process: &str, resource: &str) -> u32 {
        let Some(p) = self.processes.iter().position(|id| id == process) else {
            return 0;
        };
        let Some(r) = self.resources.iter().position(|id| id == resource) else {
            return 0;
        };
        self.rows[p][r]
    }

    /// Returns the row for `process`, if the process is known.
    #[must_use]
    pub fn row(&self, process: &str) -> Option<&[u32]> {
        let p = self.processes.iter().position(|id| id == process)?;
        Some(&self.rows[p])
    }

    /// Returns the row at declaration position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the process count.
    #[must_use]
    pub(crate) fn row_at(&self, index: usize) -> &[u32] {
        &self.rows[index]
    }

    /// Iterates `(process, row)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> + '_ {
        self.processes
            .iter()
            .map(String::as_str)
            .zip(self.rows.iter().map(Vec::as_slice))
    }
}

/// Free instances per resource.
///
/// Values are signed: allocating more instances than a resource has is not
/// rejected by the model, and shows up here as a negative count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability {
    resources: Vec<String>,
    available: Vec<i64>,
}

impl Availability {
    /// Resource ids in declaration order.
    #[must_use]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Returns free instances of `resource`, zero for unknown ids.
    #[must_use]
    pub fn get(&self, resource: &str) -> i64 {
        self.resources
            .iter()
            .position(|id| id == resource)
            .map_or(0, |r| self.available[r])
    }

    /// Free instances in resource declaration order.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.available
    }

    /// Iterates `(resource, available)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.resources
            .iter()
            .map(String::as_str)
            .zip(self.available.iter().copied())
    }
}

/// Counts allocation edges `resource → process` for every pair.
#[must_use]
pub fn allocation_matrix(graph: &AllocationGraph) -> Matrix {
    Matrix::count(graph, EdgeKind::Allocation)
}

/// Counts request edges `process → resource` for every pair.
#[must_use]
pub fn request_matrix(graph: &AllocationGraph) -> Matrix {
    Matrix::count(graph, EdgeKind::Request)
}

/// Computes capacity minus outstanding allocations for every resource.
#[must_use]
pub fn availability(graph: &AllocationGraph) -> Availability {
    let (resources, available) = graph
        .resources()
        .map(|(id, instances)| {
            let held = graph
                .edges()
                .filter(|e| e.is_allocation() && e.from == id)
                .count();
            let held = i64::try_from(held).unwrap_or(i64::MAX);
            (id.to_string(), i64::from(instances) - held)
        })
        .unzip();

    Availability {
        resources,
        available,
    }
}
