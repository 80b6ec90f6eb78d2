mod app;
mod commands;
mod output;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use crate::app::{Cli, Command, GlobalOptions};

/// Exit status after SIGINT (128 + 2).
const INTERRUPTED: i32 = 130;

/// Routes `allocgraph` records to stderr. JSON runs stay silent so stdout
/// and stderr never mix; `RUST_LOG` takes precedence over the flag-derived level.
fn init_logging(global: &GlobalOptions) {
    if global.json {
        return;
    }
    let level = if global.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_module("allocgraph", level).parse_default_env();
    builder
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.global);

    ctrlc::set_handler(|| std::process::exit(INTERRUPTED))
        .context("could not install interrupt handler")?;

    match cli.command {
        Command::Analyze { ref path } => commands::analyze::run(path, &cli.global),
        Command::Matrices { ref path } => commands::matrices::run(path, &cli.global),
        Command::Example { ref output } => commands::example::run(output.as_deref()),
    }
}
