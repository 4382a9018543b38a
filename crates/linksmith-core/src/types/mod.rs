//! Core data types for link creation.
//!
//! This module provides the fundamental types used throughout linksmith:
//! - Link kinds, requests and resolved destinations
//! - The external command invocation and its captured output
//! - The link status returned to callers
//! - The description of the external link tool

pub mod command;
pub mod link;
pub mod status;
pub mod tool;

// Re-export all public types
pub use command::{quote, Argument, CommandInvocation, ProcessOutput};
pub use link::{LinkEntry, LinkRequest, LinkType, ResolvedDestination};
pub use status::{LinkStatus, STATUS_FAILED, STATUS_PENDING, STATUS_SUCCESS};
pub use tool::LinkTool;
