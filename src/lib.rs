//! gridfill Library
//!
//! Computes the empty cells of a grid layout (items placed on an integer grid
//! with a position and size) and materializes them as 1×1 placeholder items,
//! so a layout engine can render drop targets for empty slots.
//!
//! ```
//! use gridfill::grid::get_empty_placeholders;
//! use gridfill::models::LayoutItem;
//!
//! let layout = vec![LayoutItem::new("1", 0, 0, 1, 1), LayoutItem::new("2", 1, 0, 2, 1)];
//! let placeholders = get_empty_placeholders(&layout, 4)?;
//! assert_eq!(placeholders[0].i, "placeholder-0-3");
//! # Ok::<(), gridfill::grid::GridError>(())
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod grid;
pub mod models;
pub mod parser;
pub mod services;
pub mod validator;
