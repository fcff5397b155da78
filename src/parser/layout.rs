//! Layout file parsing.
//!
//! A layout file holds a top-level sequence of items:
//!
//! ```json
//! [
//!   { "i": "1", "x": 0, "y": 0, "w": 1, "h": 1 },
//!   { "i": "2", "x": 1, "y": 0, "w": 2, "h": 1, "static": true }
//! ]
//! ```
//!
//! The same shape is accepted as JSON5 (comments, trailing commas) and YAML.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, warn};

use crate::models::Layout;

/// Serialization format of a layout file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutFormat {
    /// Plain JSON
    #[default]
    Json,
    /// JSON5 (read only; written back as JSON)
    Json5,
    /// YAML
    Yaml,
}

impl LayoutFormat {
    /// Picks the format from a file extension.
    ///
    /// `.json5` → JSON5, `.yaml`/`.yml` → YAML, anything else → JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json5") => Self::Json5,
            Some("yaml" | "yml") => Self::Yaml,
            Some("json") => Self::Json,
            other => {
                warn!(
                    extension = other.unwrap_or(""),
                    "unknown layout extension, assuming JSON"
                );
                Self::Json
            }
        }
    }
}

/// Parses layout content in the given format.
pub fn parse_layout_str(content: &str, format: LayoutFormat) -> Result<Layout> {
    let layout: Layout = match format {
        LayoutFormat::Json => serde_json::from_str(content).context("Failed to parse JSON layout")?,
        LayoutFormat::Json5 => json5::from_str(content).context("Failed to parse JSON5 layout")?,
        LayoutFormat::Yaml => serde_yml::from_str(content).context("Failed to parse YAML layout")?,
    };

    debug!(items = layout.len(), ?format, "parsed layout");
    Ok(layout)
}

/// Reads and parses a layout file, picking the format from its extension.
pub fn parse_layout_file(path: &Path) -> Result<Layout> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

    parse_layout_str(&content, LayoutFormat::from_path(path))
}
