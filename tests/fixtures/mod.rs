//! Shared test fixtures for library and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use gridfill::constants::CONFIG_DIR_ENV;
use gridfill::models::{Layout, LayoutItem};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Two items filling one row of three columns.
pub fn two_widgets() -> Layout {
    vec![LayoutItem::new("1", 0, 0, 1, 1), LayoutItem::new("2", 1, 0, 2, 1)]
}

/// A three-row dashboard with gaps.
///
/// ```text
/// A A . .
/// . B B .
/// C . D D
/// C . D D   <- C and D anchored at row 2, tallest is 2
/// ```
pub fn dashboard() -> Layout {
    vec![
        LayoutItem::new("a", 0, 0, 2, 1),
        LayoutItem::new("b", 1, 1, 2, 1),
        LayoutItem::new("c", 0, 2, 1, 2),
        LayoutItem::new("d", 2, 2, 2, 2),
    ]
}

/// A layout whose only item is a placeholder.
pub fn lone_placeholder() -> Layout {
    vec![LayoutItem::new("p", 0, 0, 1, 1).with_placeholder(true)]
}

/// A deterministic linear congruential generator for layout generation.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1))
    }

    pub fn next_below(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) % bound as u64) as usize
    }
}

/// Generates a well-formed layout: non-overlapping, within `columns`, and
/// with only items anchored at the last row taller than one cell.
pub fn generated_layout(seed: u64, rows: usize, columns: usize) -> Layout {
    let mut rng = Lcg::new(seed);
    let mut layout = Vec::new();

    for row in 0..rows {
        let last_row = row + 1 == rows;
        let mut col = 0;
        while col < columns {
            if rng.next_below(3) == 0 {
                col += 1;
                continue;
            }
            let w = 1 + rng.next_below(columns - col);
            let h = if last_row { 1 + rng.next_below(3) } else { 1 };
            layout.push(LayoutItem::new(format!("item-{row}-{col}"), col, row, w, h));
            col += w;
        }
    }

    layout
}

/// Writes a layout to `name` inside a new temp directory.
pub fn create_temp_layout_file(layout: &Layout, name: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let layout_path = temp_dir.path().join(name);
    gridfill::services::LayoutService::save(layout, &layout_path)
        .expect("Failed to write layout file");
    (layout_path, temp_dir)
}

/// Writes raw file content to `name` inside a new temp directory.
pub fn create_temp_raw_file(content: &str, name: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write file");
    (path, temp_dir)
}

/// Path to the gridfill binary
pub fn gridfill_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gridfill")
}

/// Creates a Command with an isolated config directory.
pub fn gridfill(config_dir: &Path) -> Command {
    let mut cmd = Command::new(gridfill_bin());
    cmd.env(CONFIG_DIR_ENV, config_dir);
    cmd.env_remove("RUST_LOG");
    cmd
}
