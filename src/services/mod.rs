//! Service layer for file I/O.
//!
//! This module contains services that coordinate between the parsers and
//! the rest of the application.

pub mod layouts;

// Re-export commonly used types and functions
pub use layouts::LayoutService;
