//! Description of the external link-creation tool.
//!
//! The command builder reads flags from a `LinkTool` instead of hard-coding
//! them, so the same pipeline drives `mklink` on Windows and `ln` elsewhere.

use serde::{Deserialize, Serialize};

/// External link tool and the flags it understands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkTool {
    /// Shell program and its "run this command line" arguments. Empty runs
    /// `program` directly.
    pub shell: Vec<String>,
    /// Link-creation program
    pub program: String,
    /// Arguments selecting the link-creation subcommand
    pub subcommand: Vec<String>,
    /// Flag added to every symbolic link
    pub symbolic_flag: Option<String>,
    /// Flag added to symbolic links that point at a directory
    pub directory_flag: Option<String>,
    pub junction_flag: Option<String>,
    pub hardlink_flag: Option<String>,
    /// Write the destination before the link name
    pub target_first: bool,
}

impl LinkTool {
    /// `cmd /C mklink`
    pub fn mklink() -> Self {
        Self {
            shell: vec!["cmd".to_string(), "/C".to_string()],
            program: "mklink".to_string(),
            subcommand: Vec::new(),
            symbolic_flag: None,
            directory_flag: Some("/D".to_string()),
            junction_flag: Some("/J".to_string()),
            hardlink_flag: Some("/H".to_string()),
            target_first: false,
        }
    }

    /// `sh -c ln`; junctions become directory symlinks
    pub fn ln() -> Self {
        Self {
            shell: vec!["sh".to_string(), "-c".to_string()],
            program: "ln".to_string(),
            subcommand: Vec::new(),
            symbolic_flag: Some("-s".to_string()),
            directory_flag: None,
            junction_flag: Some("-s".to_string()),
            hardlink_flag: None,
            target_first: true,
        }
    }

    /// Tool for the platform this binary was built for
    pub fn host_default() -> Self {
        if cfg!(windows) {
            Self::mklink()
        } else {
            Self::ln()
        }
    }
}

impl Default for LinkTool {
    fn default() -> Self {
        Self::host_default()
    }
}
