use std::path::Path;

use allocgraph::analysis::{detect_deadlock, evaluate_safety, DeadlockReport, SafetyReport};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{file_display_name, load_graph},
    output::{id_list, print_output},
};

#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub graph: String,
    pub processes: usize,
    pub resources: usize,
    pub edges: usize,
    pub deadlock: DeadlockReport,
    pub safety: SafetyReport,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path, &opts.limits())?;

    let result = AnalysisResult {
        graph: file_display_name(path),
        processes: graph.processes().count(),
        resources: graph.resources().count(),
        edges: graph.edge_count(),
        deadlock: detect_deadlock(&graph),
        safety: evaluate_safety(&graph),
    };

    print_output(&result, opts, |r| {
        println!(
            "Graph:     {} ({} processes, {} resources, {} edges)",
            r.graph, r.processes, r.resources, r.edges
        );

        if r.deadlock.is_deadlocked() {
            println!("Deadlock:  yes ({})", id_list(&r.deadlock.nodes, ", "));
            for cycle in &r.deadlock.cycles {
                if let Some(first) = cycle.first() {
                    println!("  Cycle:   {} -> {first}", id_list(cycle, " -> "));
                }
            }
            println!("  Edges:   {}", id_list(&r.deadlock.edges, ", "));
        } else {
            println!("Deadlock:  no");
        }

        match &r.safety {
            SafetyReport::Safe { sequence } => {
                println!("Safety:    SAFE");
                println!("  Order:   {}", id_list(sequence, " -> "));
            }
            SafetyReport::Unsafe { finished, blocked } => {
                println!("Safety:    UNSAFE");
                println!("  Done:    {}", id_list(finished, ", "));
                println!("  Blocked: {}", id_list(blocked, ", "));
            }
        }
    })
}
