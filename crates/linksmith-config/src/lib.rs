//! Configuration parsing for linksmith
//!
//! This crate handles parsing and validation of linksmith.toml files and
//! layers them with a global file, environment variables and CLI flags.

pub mod merge;
pub mod settings;

// Re-export main types
pub use merge::{ConfigLayering, ConfigLoader, ConfigSource};
pub use settings::{LinkSection, LinksmithToml, ReportSection};

use linksmith_core::error::LinkError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, LinkError>;

/// Project configuration file name
pub const CONFIG_FILE_NAME: &str = "linksmith.toml";
