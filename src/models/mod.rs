//! Data models for grid layouts and occupancy.
//!
//! This module contains the core data structures used throughout the crate.
//! Models are independent of file formats and of the CLI.

pub mod layout_item;
pub mod occupancy;

// Re-export all model types
pub use layout_item::{Layout, LayoutItem};
pub use occupancy::OccupancyMatrix;
