//! Process invocation
//!
//! Runs a `CommandInvocation` to completion and captures both output
//! streams. A non-zero exit code is a normal outcome here; only a process
//! that cannot be started is an error. The call blocks until the child exits
//! and has no timeout.

use linksmith_core::error::LinkError;
use linksmith_core::report::ErrorReport;
use linksmith_core::types::{CommandInvocation, LinkTool, ProcessOutput};
use std::io;
use std::process::{Command, Stdio};
use tracing::debug;

use crate::LinkResult;

/// Something that can run a link command
pub trait ProcessRunner {
    /// Run `invocation` and wait for it to exit
    fn run(&self, invocation: &CommandInvocation) -> io::Result<ProcessOutput>;
}

/// Runs the rendered command line through the host shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellRunner {
    shell: Vec<String>,
}

impl ShellRunner {
    /// `shell` is the program followed by its "run this line" arguments,
    /// e.g. `["cmd", "/C"]` or `["sh", "-c"]`
    pub fn new(shell: Vec<String>) -> Self {
        Self { shell }
    }

    pub fn from_tool(tool: &LinkTool) -> Self {
        Self::new(tool.shell.clone())
    }
}

impl ProcessRunner for ShellRunner {
    fn run(&self, invocation: &CommandInvocation) -> io::Result<ProcessOutput> {
        let (program, args) = self
            .shell
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no shell configured"))?;

        let mut command = Command::new(program);
        command.args(args);
        push_command_line(&mut command, &invocation.command_line());
        capture(&mut command)
    }
}

/// Runs the executable directly with its argument vector, no shell involved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectRunner;

impl ProcessRunner for DirectRunner {
    fn run(&self, invocation: &CommandInvocation) -> io::Result<ProcessOutput> {
        let mut command = Command::new(invocation.executable());
        command.args(invocation.argv());
        capture(&mut command)
    }
}

/// Runner for `tool`: its shell, or the program itself when no shell is set
pub fn runner_for(tool: &LinkTool) -> Box<dyn ProcessRunner> {
    if tool.shell.is_empty() {
        Box::new(DirectRunner)
    } else {
        Box::new(ShellRunner::from_tool(tool))
    }
}

fn capture(command: &mut Command) -> io::Result<ProcessOutput> {
    let output = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;

    Ok(ProcessOutput::from_raw(
        &output.stdout,
        &output.stderr,
        output.status.code(),
    ))
}

#[cfg(windows)]
fn push_command_line(command: &mut Command, line: &str) {
    use std::os::windows::process::CommandExt;
    // cmd.exe parses its own command line; std's quoting would double-quote it
    command.raw_arg(line);
}

#[cfg(not(windows))]
fn push_command_line(command: &mut Command, line: &str) {
    command.arg(line);
}

/// Run `invocation`, turning a launch failure into `ProcessLaunch`
pub fn invoke(
    runner: &dyn ProcessRunner,
    invocation: &CommandInvocation,
    report: &ErrorReport,
) -> LinkResult<ProcessOutput> {
    debug!(command = %invocation, "Launching link command");

    let output = runner.run(invocation).map_err(|source| {
        report.fail(
            "invoke",
            LinkError::ProcessLaunch {
                command: invocation.command_line(),
                source,
            },
        )
    })?;

    debug!(exit_code = ?output.exit_code, "Link command exited");
    Ok(output)
}
