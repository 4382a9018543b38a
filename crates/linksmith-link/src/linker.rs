//! Linker implementation
//!
//! Runs one link request through validation, command building, optional
//! confirmation, invocation and status assembly.

use camino::Utf8PathBuf;
use linksmith_core::report::ErrorReport;
use linksmith_core::types::{CommandInvocation, LinkRequest, LinkStatus, LinkTool, LinkType, ResolvedDestination};
use tracing::info;

use crate::command::build_command;
use crate::invoke::{invoke, runner_for, ProcessRunner};
use crate::status::assemble;
use crate::validate::validate_request;
use crate::LinkResult;

/// Asks whether a link command should run
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms everything
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirmer for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Creates links through the configured external tool
pub struct Linker {
    cwd: Utf8PathBuf,
    tool: LinkTool,
    report: ErrorReport,
    runner: Box<dyn ProcessRunner>,
    confirmer: Box<dyn Confirmer>,
}

impl Linker {
    /// Linker resolving relative paths against `cwd`, running `tool` through
    /// its shell (or directly when it has none)
    pub fn new(cwd: Utf8PathBuf, tool: LinkTool) -> Self {
        let runner = runner_for(&tool);
        Self {
            cwd,
            tool,
            report: ErrorReport::default(),
            runner,
            confirmer: Box::new(AlwaysConfirm),
        }
    }

    pub fn with_report(mut self, report: ErrorReport) -> Self {
        self.report = report;
        self
    }

    pub fn with_runner(mut self, runner: impl ProcessRunner + 'static) -> Self {
        self.runner = Box::new(runner);
        self
    }

    pub fn with_confirmer(mut self, confirmer: impl Confirmer + 'static) -> Self {
        self.confirmer = Box::new(confirmer);
        self
    }

    /// Validate a request and build its command without running anything
    pub fn prepare(
        &self,
        name: &str,
        destination: &str,
        link_type: LinkType,
    ) -> LinkResult<(LinkRequest, ResolvedDestination, CommandInvocation)> {
        let (request, resolved) = validate_request(name, destination, link_type, &self.cwd, &self.report)?;
        let invocation = build_command(&request, &resolved, &self.tool);
        Ok((request, resolved, invocation))
    }

    /// Create a link. Returns `Ok(None)` when `confirm` is set and the
    /// confirmer declines; nothing is run in that case.
    pub fn create(
        &self,
        name: &str,
        destination: &str,
        link_type: LinkType,
        confirm: bool,
    ) -> LinkResult<Option<LinkStatus>> {
        let (request, resolved, invocation) = self.prepare(name, destination, link_type)?;

        if confirm {
            let prompt = format!(
                "Create {} '{}' pointing at '{}'?",
                link_type, request.name, resolved.full_path
            );
            if !self.confirmer.confirm(&prompt) {
                info!("Declined creating {} at {}", link_type, request.name);
                return Ok(None);
            }
        }

        let status = LinkStatus::pending(invocation.command_line());
        let output = invoke(self.runner.as_ref(), &invocation, &self.report)?;
        let status = assemble(status, output, &request, &resolved, &self.report)?;

        info!("Created {}: {}", link_type, status.link_created.as_deref().unwrap_or_default());
        Ok(Some(status))
    }
}
