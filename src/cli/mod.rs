//! CLI command handlers for gridfill.
//!
//! This module provides headless, scriptable access to the occupancy
//! computation for automation, testing, and CI/CD integration.

pub mod common;
pub mod config;
pub mod occupancy;
pub mod pad;
pub mod placeholders;
pub mod rows;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use occupancy::OccupancyArgs;
pub use pad::PadArgs;
pub use placeholders::PlaceholdersArgs;
pub use rows::RowsArgs;
pub use validate::ValidateArgs;
