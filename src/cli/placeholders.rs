//! Placeholders command: list the empty cells of a layout.

use crate::cli::common::{load_config, load_layout, parse_columns, resolve_columns, to_json, CliError, CliResult};
use crate::config::OutputFormat;
use crate::grid::get_empty_placeholders;
use crate::models::LayoutItem;
use clap::Args;
use std::path::PathBuf;

/// Generate a placeholder item for every empty cell
#[derive(Debug, Clone, Args)]
pub struct PlaceholdersArgs {
    /// Path to layout file (.json, .json5, .yaml)
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Number of grid columns (defaults to grid.default_columns)
    #[arg(short, long, value_name = "N", value_parser = parse_columns)]
    pub columns: Option<usize>,

    /// Output format: text, json, or yaml (defaults to output.format)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl PlaceholdersArgs {
    /// Execute the placeholders command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let columns = resolve_columns(self.columns, &config)?;
        let layout = load_layout(&self.layout)?;

        let placeholders = get_empty_placeholders(&layout, columns)?;

        match self.format.unwrap_or(config.output.format) {
            OutputFormat::Json => println!("{}", to_json(&placeholders, config.output.pretty)?),
            OutputFormat::Yaml => print!(
                "{}",
                serde_yml::to_string(&placeholders)
                    .map_err(|e| CliError::io(format!("Failed to serialize YAML: {e}")))?
            ),
            OutputFormat::Text => print_text(&placeholders),
        }

        Ok(())
    }
}

/// Human-readable listing, one placeholder per line
fn print_text(placeholders: &[LayoutItem]) {
    if placeholders.is_empty() {
        println!("No empty cells");
        return;
    }

    for item in placeholders {
        println!(
            "{}  x={} y={} w={} h={}",
            item.i, item.x, item.y, item.w, item.h
        );
    }
    println!("\n{} empty cells", placeholders.len());
}
