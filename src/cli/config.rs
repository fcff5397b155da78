//! Configuration management CLI commands.

use crate::cli::common::{load_config, parse_columns, to_json, CliError, CliResult};
use crate::config::{Config, OutputFormat};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default number of grid columns
    #[arg(long, value_name = "N", value_parser = parse_columns)]
    columns: Option<usize>,

    /// Default output format (text, json, or yaml)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, value_name = "BOOL")]
    pretty: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: Option<String>,
    grid: GridOutput,
    output: OutputOutput,
}

#[derive(Serialize, Debug)]
struct GridOutput {
    default_columns: Option<usize>,
}

#[derive(Serialize, Debug)]
struct OutputOutput {
    format: String,
    pretty: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.columns.is_none() && self.format.is_none() && self.pretty.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --columns, --format, or --pretty",
            ));
        }

        let mut config = load_config()?;

        if let Some(columns) = self.columns {
            config.grid.default_columns = Some(columns);
        }

        if let Some(format) = &self.format {
            config.output.format = format
                .parse::<OutputFormat>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(pretty) = self.pretty {
            config.output.pretty = pretty;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        path: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        grid: GridOutput {
            default_columns: config.grid.default_columns,
        },
        output: OutputOutput {
            format: config.output.format.to_string(),
            pretty: config.output.pretty,
        },
    };

    println!("{}", to_json(&output, true)?);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("gridfill Configuration");
    println!("======================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("Grid:");
    match config.grid.default_columns {
        Some(columns) => println!("  Default Columns: {columns}"),
        None => println!("  Default Columns: (not configured)"),
    }
    println!();

    println!("Output:");
    println!("  Format: {}", config.output.format);
    println!("  Pretty JSON: {}", config.output.pretty);
    println!();
}
