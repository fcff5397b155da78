//! Layout file I/O service.
//!
//! This module centralizes all layout file operations, providing a consistent
//! interface for loading and saving layout files.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::models::{Layout, LayoutItem};
use crate::parser;

/// Service for managing layout file I/O operations.
///
/// This service centralizes all layout file operations to ensure consistent
/// handling of file paths, error messages, and file system operations.
pub struct LayoutService;

impl LayoutService {
    /// Loads a layout from a JSON, JSON5 or YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the layout file to load
    ///
    /// # Returns
    ///
    /// * `Ok(Layout)` - Successfully parsed layout
    /// * `Err(...)` - File not found, parse error, or I/O error
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use gridfill::services::LayoutService;
    ///
    /// let layout = LayoutService::load(Path::new("dashboard.json"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<Layout> {
        parser::parse_layout_file(path)
            .with_context(|| format!("Failed to load layout from {}", path.display()))
    }

    /// Saves a layout to a file, in the format implied by its extension.
    ///
    /// This performs an atomic write using a temp file + rename pattern to ensure
    /// the file is never left in a corrupted state.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use gridfill::{models::LayoutItem, services::LayoutService};
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let layout = vec![LayoutItem::new("chart", 0, 0, 2, 1)];
    /// LayoutService::save(&layout, Path::new("dashboard.json"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(layout: &[LayoutItem], path: &Path) -> Result<()> {
        parser::save_layout_file(layout, path)
            .with_context(|| format!("Failed to save layout to {}", path.display()))?;
        info!(path = %path.display(), items = layout.len(), "saved layout");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("layout.yaml");
        let layout = vec![LayoutItem::new("a", 0, 0, 1, 2), LayoutItem::placeholder_at(0, 1)];

        LayoutService::save(&layout, &path).unwrap();
        let loaded = LayoutService::load(&path).unwrap();

        assert_eq!(loaded, layout);
    }

    #[test]
    fn test_load_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        let err = LayoutService::load(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
