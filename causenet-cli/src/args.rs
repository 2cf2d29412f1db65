//! CLI argument definitions using clap
//!
//! Commands:
//! - causenet stats
//! - causenet causes [--limit N]
//! - causenet neighbors <CAUSE>
//! - causenet export <CAUSE> | --all

use std::path::PathBuf;

use causenet_core::config::causenet_config::split_countries;
use causenet_core::config::CliOverrides;
use causenet_core::{GraphMode, ImpactPolicy};
use clap::{Parser, Subcommand};

/// Build a cause-of-death graph and explore its neighborhoods
#[derive(Parser, Debug)]
#[command(name = "causenet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Dataset file (.json, .jsonl or .ndjson)
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Graph construction mode: stratified, flat or hierarchical
    #[arg(long, global = true, value_parser = parse_mode)]
    pub mode: Option<GraphMode>,

    /// Require an impact on every relationship descriptor
    #[arg(long, global = true)]
    pub strict: bool,

    /// Comma-separated countries to expand, e.g. FRANCE,SPAIN
    #[arg(long, global = true)]
    pub countries: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print node and edge counts with the build report
    Stats,

    /// List known causes in sorted order
    Causes {
        /// Print at most this many causes
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the direct successors of a cause
    Neighbors {
        /// Cause id (case and surrounding whitespace are ignored)
        cause: String,
    },

    /// Print the one-hop subgraph of a cause, or the whole graph, as JSON
    Export {
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        cause: Option<String>,

        /// Export every node and edge
        #[arg(long)]
        all: bool,
    },
}

impl Cli {
    /// Map the global flags onto config overrides.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dataset_path: self.dataset.clone(),
            mode: self.mode,
            impact_policy: self.strict.then_some(ImpactPolicy::Strict),
            countries: self.countries.as_deref().map(split_countries),
            max_listed_causes: match self.command {
                Command::Causes { limit } => limit,
                _ => None,
            },
        }
    }
}

fn parse_mode(raw: &str) -> Result<GraphMode, String> {
    GraphMode::from_str_name(raw).ok_or_else(|| {
        let known: Vec<&str> = GraphMode::ALL.iter().map(GraphMode::as_str).collect();
        format!("unknown mode '{raw}', expected one of: {}", known.join(", "))
    })
}
