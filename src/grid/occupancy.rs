//! Occupancy grid construction.

use tracing::{debug, trace};

use super::error::{GridError, MalformedReason};
use super::rows::row_count;
use crate::models::{LayoutItem, OccupancyMatrix};

/// Checks that an item can be placed on a `rows × columns` grid.
///
/// Every item needs `w ≥ 1` and `h ≥ 1`. Only occupying items are
/// bounds-checked: placeholders never write to the grid, so a stale
/// placeholder from a wider grid is tolerated.
pub fn check_item(item: &LayoutItem, rows: usize, columns: usize) -> Result<(), MalformedReason> {
    if item.w == 0 {
        return Err(MalformedReason::ZeroWidth);
    }
    if item.h == 0 {
        return Err(MalformedReason::ZeroHeight);
    }

    let (Some(right), Some(bottom)) = (item.right(), item.bottom()) else {
        return Err(MalformedReason::CoordinateOverflow);
    };

    if item.placeholder {
        return Ok(());
    }
    if right > columns {
        return Err(MalformedReason::ExceedsColumns { right, columns });
    }
    if bottom > rows {
        return Err(MalformedReason::ExceedsRows { bottom, rows });
    }

    Ok(())
}

/// Builds the occupancy matrix of a layout.
///
/// The matrix has [`row_count`] rows and `columns` columns. A cell is
/// `true` iff an occupying item covers it; placeholder items are skipped.
///
/// # Errors
///
/// Fails with [`GridError::MalformedItem`] on the first item (in input
/// order) that does not pass [`check_item`]. Nothing is allocated before
/// every item has been checked. Fails with [`GridError::GridTooLarge`] when
/// the matrix cannot be allocated, e.g. for a stale placeholder far below
/// the occupied rows.
pub fn build_occupancy(
    layout: &[LayoutItem],
    columns: usize,
) -> Result<OccupancyMatrix, GridError> {
    let rows = row_count(layout);

    for item in layout {
        check_item(item, rows, columns).map_err(|reason| GridError::malformed(&item.i, reason))?;
    }

    debug!(rows, columns, items = layout.len(), "building occupancy grid");

    let mut matrix = OccupancyMatrix::try_new(rows, columns)
        .ok_or(GridError::GridTooLarge { rows, columns })?;
    for item in layout.iter().filter(|item| item.is_occupying()) {
        trace!(id = %item.i, x = item.x, y = item.y, w = item.w, h = item.h, "marking item");
        for row in item.y..item.y + item.h {
            for col in item.x..item.x + item.w {
                matrix.mark(row, col);
            }
        }
    }

    Ok(matrix)
}
