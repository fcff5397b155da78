//! Rows command: print the row extent of a layout.

use crate::cli::common::{load_layout, CliResult};
use crate::grid::row_count;
use clap::Args;
use std::path::PathBuf;

/// Print the number of rows a layout spans
#[derive(Debug, Clone, Args)]
pub struct RowsArgs {
    /// Path to layout file (.json, .json5, .yaml)
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl RowsArgs {
    /// Execute the rows command
    pub fn execute(&self) -> CliResult<()> {
        let layout = load_layout(&self.layout)?;
        let rows = row_count(&layout);

        if self.json {
            println!("{}", serde_json::json!({ "rows": rows }));
        } else {
            println!("{rows}");
        }

        Ok(())
    }
}
