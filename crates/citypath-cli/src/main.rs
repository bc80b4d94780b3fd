use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use citypath_cli::output::{render_summary, OutputFormat};
use citypath_lib::{
    resolve_network, search, CycleGuard, NotFoundReason, RoadNetwork, SearchMode, SearchOptions,
    SearchRequest, SearchSummary, DEFAULT_MAX_EXPANSIONS,
};

/// Exit status for a malformed invocation.
const EXIT_USAGE: u8 = 1;
/// Exit status for a mode other than astar, greedy or uniform.
const EXIT_UNKNOWN_MODE: u8 = 2;

const UNKNOWN_MODE_MESSAGE: &str =
    "Please enter proper search type i.e. either astar, greedy or uniform (case sensitive)";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find a route between two cities with A*, greedy or uniform-cost search"
)]
struct Cli {
    /// Search mode: astar, greedy or uniform (case-sensitive).
    mode: String,
    /// Starting location name.
    source: String,
    /// Destination location name.
    destination: String,

    /// Directory holding locations.csv and edges.csv.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Rule that keeps candidate paths from doubling back.
    #[arg(long, value_enum, default_value_t = CycleGuardArg::Parent)]
    cycle_guard: CycleGuardArg,

    /// Give up after this many node expansions.
    #[arg(long, default_value_t = DEFAULT_MAX_EXPANSIONS)]
    max_expansions: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CycleGuardArg {
    /// Only forbid stepping straight back.
    Parent,
    /// Forbid revisiting any location on the path.
    FullPath,
}

impl From<CycleGuardArg> for CycleGuard {
    fn from(value: CycleGuardArg) -> Self {
        match value {
            CycleGuardArg::Parent => CycleGuard::Parent,
            CycleGuardArg::FullPath => CycleGuard::FullPath,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    let mode = match cli.mode.parse::<SearchMode>() {
        Ok(mode) => mode,
        Err(err) => {
            debug!(%err, "rejected search mode");
            eprintln!("{UNKNOWN_MODE_MESSAGE}");
            return ExitCode::from(EXIT_UNKNOWN_MODE);
        }
    };

    match handle_search(&cli, mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_search(cli: &Cli, mode: SearchMode) -> Result<()> {
    let (network, dataset) =
        resolve_network(cli.data_dir.as_deref()).context("failed to load the road network")?;
    debug!(%dataset, "using dataset");

    let request = SearchRequest::new(mode, &cli.source, &cli.destination).with_options(
        SearchOptions {
            cycle_guard: cli.cycle_guard.into(),
            max_expansions: cli.max_expansions,
        },
    );
    let outcome = search(&network, &request).with_context(|| {
        format!(
            "{mode} search from {} to {} failed",
            cli.source, cli.destination
        )
    })?;

    match outcome.not_found_reason() {
        Some(NotFoundReason::UnknownSource) => report_unknown(&network, &cli.source),
        Some(NotFoundReason::UnknownDestination) => report_unknown(&network, &cli.destination),
        Some(reason) => info!(%reason, "no route found"),
        None => {}
    }

    let summary = SearchSummary::from_outcome(&outcome);
    print!("{}", render_summary(&summary, cli.format)?);
    Ok(())
}

fn report_unknown(network: &RoadNetwork, name: &str) {
    if let Err(err) = network.require_location(name) {
        warn!("{err}");
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
