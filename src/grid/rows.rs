//! Row extent of a layout.

use crate::models::LayoutItem;

/// Computes the number of rows spanned by a layout.
///
/// Takes the largest `y`, then the tallest item anchored at that row, and
/// returns their sum. Items starting higher up are assumed not to reach
/// further down (non-overlapping layout). Placeholder items are counted
/// like any other item. An empty layout has zero rows.
#[must_use]
pub fn row_count(layout: &[LayoutItem]) -> usize {
    let last_row = layout.iter().map(|item| item.y).max().unwrap_or(0);
    let tallest_in_last_row = layout
        .iter()
        .filter(|item| item.y == last_row)
        .map(|item| item.h)
        .max()
        .unwrap_or(0);

    last_row.saturating_add(tallest_in_last_row)
}
