//! Link creation for linksmith
//!
//! This crate turns a user request into a filesystem link. A request is
//! validated against the filesystem, translated into an invocation of the
//! external link tool, run to completion, and summarized as a `LinkStatus`.
//! Every failure is reported through `ErrorReport` before it propagates.

pub mod command;
pub mod enumerate;
pub mod invoke;
pub mod linker;
pub mod status;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types
pub use command::build_command;
pub use enumerate::list_links;
pub use invoke::{invoke, runner_for, DirectRunner, ProcessRunner, ShellRunner};
pub use linker::{AlwaysConfirm, Confirmer, Linker};
pub use status::assemble;
pub use validate::{check_compatibility, validate_request};

pub use linksmith_core::error::{LinkError, LinkResult};
