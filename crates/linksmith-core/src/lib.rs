//! # linksmith-core
//!
//! Core types and utilities shared across all linksmith crates.
//!
//! This crate provides:
//! - `LinkType`, `LinkRequest` and the other link data types
//! - `CommandInvocation` and `LinkStatus` for the external link tool
//! - `LinkError` enum for unified error handling
//! - `ErrorReport` for flattening an error and its causes into a diagnostic
//! - Path helpers used by request normalization
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (LinkType, CommandInvocation, LinkStatus, etc.)
//! - `error`: Error types and result aliases
//! - `report`: Error report rendering and warn-then-return helpers
//! - `utils`: Utility functions and helpers

pub mod error;
pub mod report;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{LinkError, LinkResult};
pub use report::{ErrorContext, ErrorReport, ErrorView, DEFAULT_REPORT_WIDTH, MIN_REPORT_WIDTH};
pub use types::{
    Argument, CommandInvocation, LinkEntry, LinkRequest, LinkStatus, LinkTool, LinkType,
    ProcessOutput, ResolvedDestination,
};
