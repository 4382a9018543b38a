//! Link status returned to callers.

use serde::Serialize;
use std::fmt;

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_SUCCESS: &str = "Command completed successfully";
pub const STATUS_FAILED: &str = "Command FAILED!";

/// Outcome of one link command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStatus {
    /// Human summary of the outcome
    pub status: String,
    pub exit_code: Option<i32>,
    /// `"<name> ==> <destination>"` once the link exists
    pub link_created: Option<String>,
    /// Full command text as handed to the shell
    pub command: String,
    pub std_out: Option<String>,
    pub std_err: Option<String>,
}

impl LinkStatus {
    /// Status for a command that has not run yet
    pub fn pending(command: impl Into<String>) -> Self {
        Self {
            status: STATUS_PENDING.to_string(),
            exit_code: None,
            link_created: None,
            command: command.into(),
            std_out: None,
            std_err: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0) && self.link_created.is_some()
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exit_code = self.exit_code.map(|code| code.to_string());
        let rows = [
            ("Status", Some(self.status.as_str())),
            ("ExitCode", exit_code.as_deref()),
            ("LinkCreated", self.link_created.as_deref()),
            ("Command", Some(self.command.as_str())),
            ("StdOut", self.std_out.as_deref()),
            ("StdErr", self.std_err.as_deref()),
        ];
        for (i, (key, value)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:<11} : {}", key, value.unwrap_or(""))?;
        }
        Ok(())
    }
}
