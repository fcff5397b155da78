//! gridfill - empty-cell placeholders for grid layouts
//!
//! Reads a layout file and reports its occupancy grid, the placeholders for
//! its empty cells, or a padded copy of the layout.

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridfill::cli::{
    CliResult, ConfigArgs, OccupancyArgs, PadArgs, PlaceholdersArgs, RowsArgs, ValidateArgs,
};
use gridfill::constants::APP_NAME;

/// gridfill - compute and materialize the empty cells of a grid layout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a placeholder item for every empty cell
    Placeholders(PlaceholdersArgs),
    /// Print which cells of the grid are occupied
    Occupancy(OccupancyArgs),
    /// Print the number of rows a layout spans
    Rows(RowsArgs),
    /// Replace a layout's placeholders with one per empty cell
    Pad(PadArgs),
    /// Validate a layout file for errors and warnings
    Validate(ValidateArgs),
    /// Configuration management
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Placeholders(args) => args.execute(),
            Self::Occupancy(args) => args.execute(),
            Self::Rows(args) => args.execute(),
            Self::Pad(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs on stderr, command output on stdout
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
