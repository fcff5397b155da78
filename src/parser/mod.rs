//! Parsing and serialization of layout files.
//!
//! Layouts are read from JSON, JSON5 or YAML and written back as JSON or YAML.

pub mod layout;
pub mod writer;

// Re-export commonly used functions
pub use layout::{parse_layout_file, parse_layout_str, LayoutFormat};
pub use writer::{generate_layout, save_layout_file};
