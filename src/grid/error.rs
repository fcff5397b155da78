//! Errors raised by the occupancy computation.

use std::fmt;

use thiserror::Error;

/// Why an item was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// `w` is zero
    ZeroWidth,
    /// `h` is zero
    ZeroHeight,
    /// `x + w` or `y + h` does not fit in `usize`
    CoordinateOverflow,
    /// Right edge lies past the last column
    ExceedsColumns {
        /// Exclusive right edge (`x + w`)
        right: usize,
        /// Column count of the grid
        columns: usize,
    },
    /// Bottom edge lies past the computed row count
    ExceedsRows {
        /// Exclusive bottom edge (`y + h`)
        bottom: usize,
        /// Row count of the grid
        rows: usize,
    },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "width must be at least 1"),
            Self::ZeroHeight => write!(f, "height must be at least 1"),
            Self::CoordinateOverflow => write!(f, "rectangle extent overflows"),
            Self::ExceedsColumns { right, columns } => write!(
                f,
                "right edge {right} exceeds the grid width of {columns} columns"
            ),
            Self::ExceedsRows { bottom, rows } => write!(
                f,
                "bottom edge {bottom} exceeds the grid height of {rows} rows"
            ),
        }
    }
}

/// Errors returned by [`crate::grid`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// An item cannot be placed on the grid.
    #[error("malformed item '{id}': {reason}")]
    MalformedItem {
        /// Identifier of the offending item
        id: String,
        /// What is wrong with it
        reason: MalformedReason,
    },
    /// The grid has more cells than can be allocated.
    #[error("grid of {rows} rows × {columns} columns is too large to allocate")]
    GridTooLarge {
        /// Computed row count
        rows: usize,
        /// Column count of the grid
        columns: usize,
    },
}

impl GridError {
    /// Creates a `MalformedItem` error.
    pub fn malformed(id: impl Into<String>, reason: MalformedReason) -> Self {
        Self::MalformedItem {
            id: id.into(),
            reason,
        }
    }
}
