//! CLI entry point for the frog solver.
//!
//! Usage:
//!   frog-solver [options]
//!
//! Options:
//!   --format <text|json>  Output format (default: text)
//!   --no-prune            Keep exhausted branches of the search tree
//!   --stats               Print search statistics to stderr when done
//!
//! Log verbosity is read from `RUST_LOG` (default: warn).

use std::io::{self, Write};
use std::process;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

use frog_solver::{search, solve_all, SearchStats, SolutionPath, SolveError, SolverConfig};

#[derive(Parser)]
#[command(name = "frog-solver")]
#[command(about = "Find every way to swap the frogs in the jumping frogs puzzle")]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Keep exhausted branches of the search tree instead of releasing them
    #[arg(long)]
    no_prune: bool,

    /// Print search statistics to stderr when done
    #[arg(long)]
    stats: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Solution paths as they are found
    Text,
    /// One JSON document once the search is exhausted
    Json,
}

/// JSON output document
#[derive(Serialize)]
struct SolutionsOutput<'a> {
    solutions: &'a [SolutionPath],
    stats: &'a SearchStats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SolverConfig {
        prune: !cli.no_prune,
        ..SolverConfig::default()
    };

    match run(&cli, &config) {
        Ok(stats) => {
            if cli.stats {
                eprintln!(
                    "expanded {} nodes, found {} solutions, peak {} live nodes, released {} in {}ms",
                    stats.expanded,
                    stats.solutions,
                    stats.peak_live_nodes,
                    stats.released_nodes,
                    stats.time_elapsed_ms
                );
            }
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli, config: &SolverConfig) -> Result<SearchStats, SolveError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let stats = match cli.format {
        Format::Text => search(config, |path| {
            write!(out, "{}", path)?;
            Ok(())
        })?,
        Format::Json => {
            let result = solve_all(config)?;
            let output = SolutionsOutput {
                solutions: &result.solutions,
                stats: &result.stats,
            };
            serde_json::to_writer_pretty(&mut out, &output)?;
            writeln!(out)?;
            result.stats
        }
    };

    out.flush()?;
    Ok(stats)
}
