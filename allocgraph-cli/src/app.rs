use std::path::PathBuf;

use allocgraph::config::Limits;
use clap::{Parser, Subcommand};

/// allocgraph - deadlock detection and Banker's safety analysis for resource-allocation graphs
#[derive(Debug, Parser)]
#[command(name = "allocgraph", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Reject graph documents with more nodes than this (default: 256).
    #[arg(long, global = true, value_name = "N")]
    pub max_nodes: Option<usize>,

    /// Reject graph documents with more edges than this (default: 4096).
    #[arg(long, global = true, value_name = "N")]
    pub max_edges: Option<usize>,
}

impl GlobalOptions {
    /// The size limits selected on the command line, defaults filled in.
    pub fn limits(&self) -> Limits {
        let defaults = Limits::default();
        Limits::new(
            self.max_nodes.unwrap_or(defaults.max_nodes),
            self.max_edges.unwrap_or(defaults.max_edges),
        )
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report deadlocked processes and whether the state is safe.
    Analyze {
        /// Path to the graph document (JSON).
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Print the allocation, request and availability tables.
    Matrices {
        /// Path to the graph document (JSON).
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Print the classic two-process deadlock as a graph document.
    Example {
        /// Write the document to this file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_flags_override_defaults() {
        let cli = Cli::parse_from(["allocgraph", "--max-nodes", "8", "analyze", "g.json"]);
        assert_eq!(cli.global.limits(), Limits::new(8, Limits::default().max_edges));
        assert!(matches!(cli.command, Command::Analyze { .. }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["allocgraph", "matrices", "g.json", "--json", "-v"]);
        assert!(cli.global.json);
        assert!(cli.global.verbose);
        assert_eq!(cli.global.limits(), Limits::default());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
