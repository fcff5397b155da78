//! Occupancy computation for grid layouts.
//!
//! Converts a sparse list of placed rectangles into a dense occupancy grid
//! and enumerates the unoccupied unit cells as placeholder items:
//!
//! 1. [`row_count`] finds the row extent of the layout
//! 2. [`build_occupancy`] marks every cell covered by an occupying item
//! 3. [`get_empty_placeholders`] emits a 1×1 placeholder per empty cell
//!
//! All functions are pure: inputs are borrowed immutably and every call
//! allocates its own grid, so they can be called concurrently.

pub mod error;
pub mod occupancy;
pub mod placeholders;
pub mod rows;

pub use error::{GridError, MalformedReason};
pub use occupancy::{build_occupancy, check_item};
pub use placeholders::{get_empty_placeholders, pad_layout, strip_placeholders};
pub use rows::row_count;
