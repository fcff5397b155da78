//! Layout file generation.

use anyhow::{Context, Result};
use std::path::Path;

use super::layout::LayoutFormat;
use crate::models::LayoutItem;

/// Serializes a layout in the given format.
///
/// JSON5 input is written back as pretty JSON, which every JSON5 reader accepts.
pub fn generate_layout(layout: &[LayoutItem], format: LayoutFormat, pretty: bool) -> Result<String> {
    let mut output = match format {
        LayoutFormat::Json | LayoutFormat::Json5 => {
            let json = if pretty || format == LayoutFormat::Json5 {
                serde_json::to_string_pretty(layout)
            } else {
                serde_json::to_string(layout)
            };
            json.context("Failed to serialize layout to JSON")?
        }
        LayoutFormat::Yaml => {
            serde_yml::to_string(layout).context("Failed to serialize layout to YAML")?
        }
    };

    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

/// Saves a layout to a file, picking the format from its extension.
pub fn save_layout_file(layout: &[LayoutItem], path: &Path) -> Result<()> {
    let content = generate_layout(layout, LayoutFormat::from_path(path), true)?;
    atomic_write(path, &content)
}

/// Writes content to a temp file next to `path`, then renames it into place.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LayoutItem;
    use crate::parser::layout::{parse_layout_file, parse_layout_str};
    use tempfile::TempDir;

    fn sample() -> Vec<LayoutItem> {
        vec![LayoutItem::new("1", 0, 0, 2, 1), LayoutItem::placeholder_at(0, 2)]
    }

    #[test]
    fn test_compact_json() {
        let json = generate_layout(&[LayoutItem::new("1", 0, 0, 1, 1)], LayoutFormat::Json, false)
            .unwrap();
        assert_eq!(json, "[{\"i\":\"1\",\"x\":0,\"y\":0,\"w\":1,\"h\":1}]\n");
    }

    #[test]
    fn test_yaml_output_parses_back() {
        let yaml = generate_layout(&sample(), LayoutFormat::Yaml, true).unwrap();
        assert!(yaml.contains("placeholder: true"));
        assert_eq!(parse_layout_str(&yaml, LayoutFormat::Yaml).unwrap(), sample());
    }

    #[test]
    fn test_save_layout_file_is_atomic() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("layout.json");

        save_layout_file(&sample(), &path).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("layout.json.tmp").exists());
        assert_eq!(parse_layout_file(&path).unwrap(), sample());
    }
}
