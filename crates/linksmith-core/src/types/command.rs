//! External command types.
//!
//! A `CommandInvocation` is built once by the command builder and never
//! changed afterwards. Path arguments are quoted independently when the
//! invocation is rendered for the host shell.

use serde::Serialize;
use std::fmt;

/// One argument of the link command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Argument {
    /// Subcommand or option, rendered verbatim
    Flag(String),
    /// Filesystem path, always quoted when rendered
    Path(String),
}

impl Argument {
    /// Raw value without quoting
    pub fn as_str(&self) -> &str {
        match self {
            Argument::Flag(value) | Argument::Path(value) => value,
        }
    }

    /// Value as it appears on the shell command line
    pub fn render(&self) -> String {
        match self {
            Argument::Flag(value) => value.clone(),
            Argument::Path(value) => quote(value),
        }
    }
}

/// A fully built call of the external link tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInvocation {
    executable: String,
    arguments: Vec<Argument>,
}

impl CommandInvocation {
    /// Start an invocation of `executable` with no arguments
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            arguments: Vec::new(),
        }
    }

    /// Append a verbatim argument
    pub fn flag(mut self, flag: impl Into<String>) -> Self {
        self.arguments.push(Argument::Flag(flag.into()));
        self
    }

    /// Append a quoted path argument
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.arguments.push(Argument::Path(path.into()));
        self
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Unquoted argument vector, excluding the executable
    pub fn argv(&self) -> Vec<&str> {
        self.arguments.iter().map(Argument::as_str).collect()
    }

    /// Full command text handed to the host shell
    pub fn command_line(&self) -> String {
        let mut line = if self.executable.chars().any(char::is_whitespace) {
            quote(&self.executable)
        } else {
            self.executable.clone()
        };
        for argument in &self.arguments {
            line.push(' ');
            line.push_str(&argument.render());
        }
        line
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Captured result of a process that ran to completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    /// Build from raw stream bytes, trimming trailing whitespace and mapping
    /// empty streams to `None`
    pub fn from_raw(stdout: &[u8], stderr: &[u8], exit_code: Option<i32>) -> Self {
        Self {
            stdout: captured(stdout),
            stderr: captured(stderr),
            exit_code,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

fn captured(bytes: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim_end();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Quote one argument for the host shell
#[cfg(windows)]
pub fn quote(value: &str) -> String {
    // cmd.exe has no escape for '"' inside quotes; paths cannot contain it
    format!("\"{}\"", value)
}

/// Quote one argument for the host shell
#[cfg(not(windows))]
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
