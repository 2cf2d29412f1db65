//! `causenet`: load a dataset, build the graph, answer one query.

mod args;
mod commands;
mod error;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use causenet_core::errors::ConfigError;
use causenet_core::logging::init_tracing;
use causenet_core::{CausenetConfig, CausenetError};
use causenet_graph::source::from_path;
use causenet_graph::{build_graph, BuildOptions};

use crate::args::{Cli, Command};
use crate::error::CliError;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.display_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let overrides = cli.overrides();
    let config = CausenetConfig::load(&root, Some(&overrides)).map_err(CausenetError::from)?;

    let path = config.dataset.path.as_deref().ok_or_else(|| {
        CausenetError::from(ConfigError::ValidationFailed {
            field: "dataset.path".to_string(),
            message: "no dataset given; pass --dataset or set CAUSENET_DATASET_PATH".to_string(),
        })
    })?;
    let dataset = from_path(path)?.load()?;
    let graph = build_graph(&dataset, &BuildOptions::from_config(&config));
    tracing::debug!(causes = graph.index().cause_count(), "graph ready");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Stats => commands::stats(&graph, &mut out)?,
        Command::Causes { .. } => commands::causes(&graph, &mut out)?,
        Command::Neighbors { cause } => commands::neighbors(&graph, cause, &mut out)?,
        Command::Export { cause, all } => {
            let cause = if *all { None } else { cause.as_deref() };
            commands::export(&graph, cause, &mut out)?
        }
    }
    out.flush()?;
    Ok(())
}
