//! Link request types.
//!
//! Defines the link kinds and the request/destination pair produced by
//! validation.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LinkError;

/// Kind of link to create
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkType {
    /// Redirects to a file or directory on any volume
    #[default]
    #[serde(rename = "symbolic", alias = "symlink", alias = "symboliclink")]
    SymbolicLink,
    /// Directory-only redirection resolved by the filesystem driver
    #[serde(rename = "junction")]
    Junction,
    /// Additional directory entry for the same file data
    #[serde(rename = "hardlink")]
    Hardlink,
}

impl LinkType {
    pub const ALL: [LinkType; 3] = [LinkType::SymbolicLink, LinkType::Junction, LinkType::Hardlink];

    /// Check if this link kind may point at a directory
    pub fn allows_directory(&self) -> bool {
        !matches!(self, LinkType::Hardlink)
    }

    /// Check if this link kind may point at a non-directory
    pub fn allows_file(&self) -> bool {
        !matches!(self, LinkType::Junction)
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkType::SymbolicLink => "SymbolicLink",
            LinkType::Junction => "Junction",
            LinkType::Hardlink => "Hardlink",
        };
        f.write_str(name)
    }
}

impl FromStr for LinkType {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "symbolic" | "symlink" | "symboliclink" => Ok(LinkType::SymbolicLink),
            "junction" => Ok(LinkType::Junction),
            "hardlink" => Ok(LinkType::Hardlink),
            _ => Err(LinkError::UnsupportedLinkType {
                value: s.to_string(),
            }),
        }
    }
}

/// A normalized request to create one link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    /// Absolute path of the link to create
    pub name: Utf8PathBuf,
    /// Destination exactly as the caller supplied it
    pub destination: Utf8PathBuf,
    pub link_type: LinkType,
}

/// Destination after it has been checked against the filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDestination {
    /// Absolute path, verified to exist
    pub full_path: Utf8PathBuf,
    pub is_directory: bool,
}

/// An existing link found by enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub path: Utf8PathBuf,
    /// Where the link points, when it can be read
    pub target: Option<Utf8PathBuf>,
    pub is_directory: bool,
}
