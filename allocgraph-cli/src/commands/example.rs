use std::path::Path;

use allocgraph::model::AllocationGraph;
use anyhow::Context;

/// Emits the classic deadlock document. Always JSON: the output is meant to be
/// edited and fed back to `analyze`.
pub fn run(output: Option<&Path>) -> anyhow::Result<()> {
    let json = AllocationGraph::classic_deadlock()
        .to_json()
        .context("failed to serialize example graph")?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote example graph to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
