use std::path::Path;

use allocgraph::{config::Limits, model::AllocationGraph};
use anyhow::Context;

/// Load a graph document, enforcing `limits` before the graph is built.
pub fn load_graph(path: &Path, limits: &Limits) -> anyhow::Result<AllocationGraph> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read graph document: {}", path.display()))?;
    AllocationGraph::from_json(&json, limits)
        .with_context(|| format!("failed to load graph: {}", path.display()))
}

/// Extract a display-friendly filename from a path.
pub fn file_display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    )
}
