//! @ai:module:intent CLI entry point for sb-perf
//! @ai:module:layer presentation
//! @ai:module:depends_on config, pipeline, report

use anyhow::{Context, Result};
use clap::Parser;
use sb_perf::{pipeline, DuplicateTaskPolicy, PerfConfig, RunOptions, StdSink};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_CONFIG: &str = "sb-perf.toml";

#[derive(Parser)]
#[command(name = "sb-perf")]
#[command(author, version, about = "Aggregate benchmark result files into CSV statistics")]
struct Cli {
    /// Results directories; more than one compares them side by side
    directories: Vec<PathBuf>,

    /// Path to configuration file (defaults to ./sb-perf.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep only the last sample when a result file repeats a task
    #[arg(long)]
    last_write_wins: bool,

    /// Skip records without a numeric measurement instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Also write the statistics as a JSON report
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Write the default configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    init_config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose)?;

    if let Some(output) = cli.init_config {
        return init_config(output);
    }

    let mut config = load_or_default_config(cli.config)?;

    if cli.last_write_wins {
        config.aggregation.duplicate_tasks = DuplicateTaskPolicy::LastWriteWins;
    }
    if cli.skip_malformed {
        config.aggregation.skip_malformed = true;
    }

    tracing::debug!(
        "Duplicate tasks: {}, skip malformed: {}",
        config.aggregation.duplicate_tasks,
        config.aggregation.skip_malformed
    );

    let options = RunOptions {
        directories: cli.directories,
        json_output: cli.json,
    };

    pipeline::run(&config, &options, &mut StdSink)?;
    Ok(())
}

/// @ai:intent Log to stderr so stdout carries only CSV
/// @ai:effects io
fn init_tracing(verbose: bool) -> Result<()> {
    let directive = if verbose { "sb_perf=debug" } else { "sb_perf=warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// @ai:intent Write the default configuration
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    PerfConfig::default().save(&output)?;
    eprintln!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<PerfConfig> {
    match path {
        Some(p) => PerfConfig::load(&p)
            .with_context(|| format!("Failed to load config {}", p.display())),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG);

            if default_path.exists() {
                PerfConfig::load(&default_path)
                    .with_context(|| format!("Failed to load config {}", default_path.display()))
            } else {
                Ok(PerfConfig::default())
            }
        }
    }
}
