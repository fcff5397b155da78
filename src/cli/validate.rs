//! Validation command for layout files.

use crate::cli::common::{load_config, load_layout, parse_columns, resolve_columns, to_json, CliError, CliResult};
use crate::grid::row_count;
use crate::validator::{LayoutValidator, ValidationWarningKind};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a layout file for errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to layout file (.json, .json5, .yaml)
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Number of grid columns (defaults to grid.default_columns)
    #[arg(short, long, value_name = "N", value_parser = parse_columns)]
    pub columns: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// JSON-serializable validation result
#[derive(Serialize, Debug)]
struct ValidationResponse {
    valid: bool,
    rows: usize,
    columns: usize,
    diagnostics: Vec<ValidationMessage>,
}

#[derive(Serialize, Debug)]
struct ValidationMessage {
    severity: &'static str,
    kind: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let columns = resolve_columns(self.columns, &config)?;
        let layout = load_layout(&self.layout)?;

        let report = LayoutValidator::new(&layout, columns)
            .validate()
            .map_err(|e| CliError::io(format!("Validation failed: {e}")))?;

        let mut messages: Vec<ValidationMessage> = report
            .errors
            .iter()
            .map(|error| ValidationMessage {
                severity: "error",
                kind: error.kind.to_string(),
                message: error.message.clone(),
                item: error.item.clone(),
                suggestion: error.suggestion.clone(),
            })
            .collect();

        messages.extend(report.warnings.iter().map(|warning| ValidationMessage {
            severity: "warning",
            kind: warning_kind_name(warning.kind).to_string(),
            message: warning.message.clone(),
            item: None,
            suggestion: None,
        }));

        let response = ValidationResponse {
            valid: report.is_valid(),
            rows: row_count(&layout),
            columns,
            diagnostics: messages,
        };

        if self.json {
            println!("{}", to_json(&response, config.output.pretty)?);
        } else {
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }
            println!(
                "\nGrid: {} rows × {} columns, {} items",
                response.rows,
                response.columns,
                layout.len()
            );

            if !report.errors.is_empty() || !report.warnings.is_empty() {
                println!("\n{}", report.format_message());
            }
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && !report.warnings.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}

fn warning_kind_name(kind: ValidationWarningKind) -> &'static str {
    match kind {
        ValidationWarningKind::DuplicateIdentifier => "Duplicate Identifier",
        ValidationWarningKind::ReservedIdentifier => "Reserved Identifier",
        ValidationWarningKind::Overlap => "Overlap",
        ValidationWarningKind::StalePlaceholder => "Stale Placeholder",
    }
}
