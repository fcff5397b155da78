//! Placeholder generation for empty cells.

use tracing::debug;

use super::error::GridError;
use super::occupancy::build_occupancy;
use crate::models::{Layout, LayoutItem};

/// Generates one 1×1 placeholder per empty cell of the layout.
///
/// Cells are visited row-major (ascending row, then column) over
/// `[0, row_count) × [0, columns)`. Each placeholder has id
/// `placeholder-{row}-{col}`, `x = col`, `y = row` and `placeholder: true`.
/// The input layout is not modified.
///
/// # Errors
///
/// Returns [`GridError::MalformedItem`] when an item cannot be placed on the
/// grid, or [`GridError::GridTooLarge`] when the grid cannot be allocated.
pub fn get_empty_placeholders(layout: &[LayoutItem], columns: usize) -> Result<Layout, GridError> {
    let matrix = build_occupancy(layout, columns)?;

    let placeholders: Layout = matrix
        .empty_cells()
        .map(|(row, col)| LayoutItem::placeholder_at(row, col))
        .collect();

    debug!(
        rows = matrix.rows(),
        columns,
        placeholders = placeholders.len(),
        "generated empty placeholders"
    );

    Ok(placeholders)
}

/// Returns the occupying items of a layout, input order preserved.
#[must_use]
pub fn strip_placeholders(layout: &[LayoutItem]) -> Layout {
    layout
        .iter()
        .filter(|item| item.is_occupying())
        .cloned()
        .collect()
}

/// Replaces the placeholders of a layout with a fresh set.
///
/// Existing placeholders are dropped, then one placeholder per empty cell is
/// appended after the occupying items. Padding an already padded layout
/// yields the same layout.
///
/// # Errors
///
/// Returns [`GridError::MalformedItem`] when an item cannot be placed on the
/// grid, or [`GridError::GridTooLarge`] when the grid cannot be allocated.
pub fn pad_layout(layout: &[LayoutItem], columns: usize) -> Result<Layout, GridError> {
    let mut padded = strip_placeholders(layout);
    let placeholders = get_empty_placeholders(&padded, columns)?;
    padded.extend(placeholders);
    Ok(padded)
}
