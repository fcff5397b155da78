//! Occupancy command: print the occupancy grid of a layout.

use crate::cli::common::{load_config, load_layout, parse_columns, resolve_columns, to_json, CliResult};
use crate::grid::build_occupancy;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Print which cells of the grid are occupied
#[derive(Debug, Clone, Args)]
pub struct OccupancyArgs {
    /// Path to layout file (.json, .json5, .yaml)
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Number of grid columns (defaults to grid.default_columns)
    #[arg(short, long, value_name = "N", value_parser = parse_columns)]
    pub columns: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable occupancy grid
#[derive(Serialize, Debug)]
struct OccupancyOutput {
    rows: usize,
    columns: usize,
    occupied: usize,
    empty: usize,
    cells: Vec<Vec<bool>>,
}

impl OccupancyArgs {
    /// Execute the occupancy command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let columns = resolve_columns(self.columns, &config)?;
        let layout = load_layout(&self.layout)?;

        let matrix = build_occupancy(&layout, columns)?;

        if self.json {
            let output = OccupancyOutput {
                rows: matrix.rows(),
                columns: matrix.columns(),
                occupied: matrix.occupied_count(),
                empty: matrix.empty_count(),
                cells: matrix.to_rows(),
            };
            println!("{}", to_json(&output, config.output.pretty)?);
        } else {
            print!("{matrix}");
            println!();
            println!(
                "{} rows × {} columns, {} occupied, {} empty",
                matrix.rows(),
                matrix.columns(),
                matrix.occupied_count(),
                matrix.empty_count()
            );
        }

        Ok(())
    }
}
