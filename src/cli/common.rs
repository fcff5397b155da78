//! Shared types and helpers for CLI commands.

use std::path::Path;

use thiserror::Error;

use crate::config::Config;
use crate::grid::GridError;
use crate::models::Layout;
use crate::services::LayoutService;

/// Process exit codes used by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input: malformed layout, bad arguments, failed validation
    Validation = 1,
    /// File could not be read, parsed, or written
    Io = 2,
}

impl ExitCode {
    /// Numeric exit status.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands, carrying the exit code to use.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CliError {
    /// Exit code for the process
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Numeric exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code.code()
    }
}

impl From<GridError> for CliError {
    fn from(err: GridError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a `--columns` value, which must be a positive integer.
pub fn parse_columns(value: &str) -> Result<usize, String> {
    let columns: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a valid column count"))?;
    if columns == 0 {
        return Err("column count must be at least 1".to_string());
    }
    Ok(columns)
}

/// Loads the application configuration.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

/// Loads a layout file.
pub fn load_layout(path: &Path) -> CliResult<Layout> {
    LayoutService::load(path).map_err(|e| CliError::io(format!("Failed to load layout: {e:#}")))
}

/// Resolves `--columns` against the configured default.
pub fn resolve_columns(explicit: Option<usize>, config: &Config) -> CliResult<usize> {
    config.resolve_columns(explicit).ok_or_else(|| {
        CliError::validation(
            "Column count not specified. Use --columns or set grid.default_columns with `gridfill config set --columns N`",
        )
    })
}

/// Serializes a value as JSON, pretty or compact.
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}
