//! Grid layout items.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::PLACEHOLDER_ID_PREFIX;

/// An ordered sequence of layout items.
pub type Layout = Vec<LayoutItem>;

/// A rectangle placed on an integer grid.
///
/// # Coordinates
///
/// - `x` is the column index of the top-left cell, `y` the row index
/// - `w` and `h` are the width and height in cells (both expected ≥ 1)
/// - The item covers columns `[x, x + w)` and rows `[y, y + h)`
///
/// Unknown fields found on input (`minW`, `static`, ...) are kept in
/// `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    /// Identifier, unique within a layout
    pub i: String,
    /// Column of the top-left cell
    pub x: usize,
    /// Row of the top-left cell
    pub y: usize,
    /// Width in cells
    pub w: usize,
    /// Height in cells
    pub h: usize,
    /// Marks an empty-slot placeholder rather than real content
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub placeholder: bool,
    /// Caller-defined fields carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LayoutItem {
    /// Creates a new occupying `LayoutItem`.
    pub fn new(i: impl Into<String>, x: usize, y: usize, w: usize, h: usize) -> Self {
        Self {
            i: i.into(),
            x,
            y,
            w,
            h,
            placeholder: false,
            extra: Map::new(),
        }
    }

    /// Creates the 1×1 placeholder for the empty cell at (`row`, `col`).
    #[must_use]
    pub fn placeholder_at(row: usize, col: usize) -> Self {
        Self::new(placeholder_id(row, col), col, row, 1, 1).with_placeholder(true)
    }

    /// Sets the placeholder flag.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: bool) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Returns true if this item occupies cells (i.e. is not a placeholder).
    #[must_use]
    pub const fn is_occupying(&self) -> bool {
        !self.placeholder
    }

    /// Exclusive right edge (`x + w`), or `None` on overflow.
    #[must_use]
    pub const fn right(&self) -> Option<usize> {
        self.x.checked_add(self.w)
    }

    /// Exclusive bottom edge (`y + h`), or `None` on overflow.
    #[must_use]
    pub const fn bottom(&self) -> Option<usize> {
        self.y.checked_add(self.h)
    }

    /// Returns true if the item covers the cell at (`row`, `col`).
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        let in_rows = row >= self.y && self.bottom().map_or(true, |bottom| row < bottom);
        let in_cols = col >= self.x && self.right().map_or(true, |right| col < right);
        in_rows && in_cols
    }
}

/// Formats the id of a generated placeholder.
#[must_use]
pub fn placeholder_id(row: usize, col: usize) -> String {
    format!("{PLACEHOLDER_ID_PREFIX}-{row}-{col}")
}
