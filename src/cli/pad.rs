//! Pad command: write a layout with its empty cells filled by placeholders.

use crate::cli::common::{load_config, load_layout, parse_columns, resolve_columns, CliError, CliResult};
use crate::grid::pad_layout;
use crate::parser::{generate_layout, LayoutFormat};
use crate::services::LayoutService;
use clap::Args;
use std::path::PathBuf;

/// Replace a layout's placeholders with one per empty cell
#[derive(Debug, Clone, Args)]
pub struct PadArgs {
    /// Path to layout file (.json, .json5, .yaml)
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Number of grid columns (defaults to grid.default_columns)
    #[arg(short, long, value_name = "N", value_parser = parse_columns)]
    pub columns: Option<usize>,

    /// Write the padded layout here instead of stdout (format from extension)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl PadArgs {
    /// Execute the pad command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let columns = resolve_columns(self.columns, &config)?;
        let layout = load_layout(&self.layout)?;

        let padded = pad_layout(&layout, columns)?;

        if let Some(path) = &self.output {
            LayoutService::save(&padded, path)
                .map_err(|e| CliError::io(format!("Failed to write padded layout: {e:#}")))?;
            eprintln!(
                "Wrote {} items ({} placeholders) to {}",
                padded.len(),
                padded.iter().filter(|item| item.placeholder).count(),
                path.display()
            );
        } else {
            let format = LayoutFormat::from_path(&self.layout);
            let content = generate_layout(&padded, format, config.output.pretty)
                .map_err(|e| CliError::io(format!("Failed to serialize layout: {e:#}")))?;
            print!("{content}");
        }

        Ok(())
    }
}
