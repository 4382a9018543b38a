//! Utility functions and helpers.
//!
//! Common functionality used across multiple linksmith crates.

pub mod path;

// Re-export commonly used utilities
pub use path::{absolutize, normalize_path, utf8_path};
