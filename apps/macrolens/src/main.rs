//! # Macrolens
//!
//! Command-line front end for the crisis-comparison engine.

use clap::{Parser, Subcommand};
use macrolens::AppError;
use macrolens::cli;
use macrolens::macrolens_core::CycleType;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "macrolens", version, about = "Compare today's macro snapshot with historical crises")]
struct Cli {
    /// Catalog file (JSON or binary snapshot). Defaults to the built-in catalog.
    #[arg(long, global = true, env = "MACROLENS_CATALOG")]
    catalog: Option<PathBuf>,

    /// Engine config (JSON). Only the named values override the defaults.
    #[arg(long, global = true, env = "MACROLENS_CONFIG")]
    config: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging on stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank historical crises by similarity to current conditions
    Similarity {
        /// Current-conditions snapshot (JSON) to use instead of the catalog's
        #[arg(long)]
        current: Option<PathBuf>,
        /// Only show the N best matches
        #[arg(long)]
        top: Option<usize>,
    },
    /// Classify every crisis into a generation model
    Generations,
    /// Assess business-cycle risk from the indicator basket
    Cycle {
        /// Also show the debt-cycle phases containing this year
        #[arg(long)]
        year: Option<i32>,
    },
    /// List debt-cycle phases in chronological order
    Timeline {
        /// Short-term cycle instead of long-term
        #[arg(long)]
        short_term: bool,
    },
    /// Net capital flow from push and pull factors
    Flows {
        /// Weight factors by their current level
        #[arg(long)]
        weighted: bool,
    },
    /// Validate catalog and config, report diagnostics
    Validate,
    /// Write the catalog as a binary snapshot
    Export {
        #[arg(long)]
        out: PathBuf,
    },
    /// Read a binary snapshot and validate it
    Import {
        #[arg(long)]
        input: PathBuf,
        /// Write the imported catalog as JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Cli) -> Result<(), AppError> {
    let catalog = args.catalog.as_deref();
    let config = || cli::load_config(args.config.as_deref());

    match args.command {
        Commands::Similarity { current, top } => {
            cli::cmd_similarity(catalog, &config()?, current.as_deref(), top, args.json)
        }
        Commands::Generations => cli::cmd_generations(catalog, &config()?, args.json),
        Commands::Cycle { year } => cli::cmd_cycle(catalog, year, args.json),
        Commands::Timeline { short_term } => {
            let cycle_type = if short_term {
                CycleType::ShortTerm
            } else {
                CycleType::LongTerm
            };
            cli::cmd_timeline(catalog, cycle_type, args.json)
        }
        Commands::Flows { weighted } => cli::cmd_flows(catalog, &config()?, weighted, args.json),
        Commands::Validate => cli::cmd_validate(catalog, args.config.as_deref(), args.json),
        Commands::Export { out } => cli::cmd_export(catalog, &out),
        Commands::Import { input, out } => cli::cmd_import(&input, out.as_deref(), args.json),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
