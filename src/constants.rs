//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the generated placeholder id format.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "gridfill";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "gridfill";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "gridfill";

/// Environment variable that overrides the config directory (used by tests and CI).
pub const CONFIG_DIR_ENV: &str = "GRIDFILL_CONFIG_DIR";

/// Prefix of every generated placeholder id: `placeholder-{row}-{col}`.
pub const PLACEHOLDER_ID_PREFIX: &str = "placeholder";
