//! Error types and result aliases for linksmith operations.
//!
//! Every failure of the link pipeline maps to exactly one variant so callers
//! can branch on the kind of failure rather than on message text.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::types::LinkType;

/// Unified error type for all linksmith operations
#[derive(Error, Debug)]
pub enum LinkError {
    // Validation errors
    #[error("Cannot resolve path '{target}'")]
    PathResolution {
        target: Utf8PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("{reason} (requested {link_type} to '{destination}')")]
    InvalidLinkType {
        link_type: LinkType,
        destination: Utf8PathBuf,
        reason: String,
    },

    #[error("Unsupported link type '{value}'")]
    UnsupportedLinkType { value: String },

    // Process errors
    #[error("Failed to launch link command: {command}")]
    ProcessLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Link command failed:\n{status}")]
    CommandFailed {
        exit_code: Option<i32>,
        status: String,
    },

    // Config errors
    #[error("Failed to parse {path}: {message}")]
    ConfigParse { path: Utf8PathBuf, message: String },

    #[error("Configuration field '{field}' is invalid: {reason}")]
    ConfigValidation { field: String, reason: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for linksmith operations
pub type LinkResult<T> = Result<T, LinkError>;

impl LinkError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Create a path resolution error, keeping the underlying IO failure if any
    pub fn path_resolution(target: impl Into<Utf8PathBuf>, source: Option<std::io::Error>) -> Self {
        Self::PathResolution {
            target: target.into(),
            source,
        }
    }

    /// Create an invalid link type error for a destination of the wrong kind
    pub fn invalid_link_type(
        link_type: LinkType,
        destination: impl Into<Utf8PathBuf>,
        reason: &str,
    ) -> Self {
        Self::InvalidLinkType {
            link_type,
            destination: destination.into(),
            reason: reason.to_string(),
        }
    }

    /// Stable name of the error kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            LinkError::PathResolution { .. } => "PathResolutionError",
            LinkError::InvalidLinkType { .. } => "InvalidLinkTypeError",
            LinkError::UnsupportedLinkType { .. } => "UnsupportedLinkTypeError",
            LinkError::ProcessLaunch { .. } => "ProcessLaunchError",
            LinkError::CommandFailed { .. } => "CommandFailedError",
            LinkError::ConfigParse { .. } => "ConfigParseError",
            LinkError::ConfigValidation { .. } => "ConfigValidationError",
            LinkError::Io { .. } => "IoError",
        }
    }

    /// Raw numeric result code: the OS error for IO-backed failures, the
    /// exit code for failed commands.
    pub fn result_code(&self) -> Option<i32> {
        match self {
            LinkError::PathResolution { source, .. } => {
                source.as_ref().and_then(|e| e.raw_os_error())
            },
            LinkError::ProcessLaunch { source, .. } | LinkError::Io { source, .. } => {
                source.raw_os_error()
            },
            LinkError::CommandFailed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }

    /// Variant fields as name/value pairs, excluding the result code
    pub fn properties(&self) -> Vec<(&'static str, String)> {
        match self {
            LinkError::PathResolution { target, .. } => vec![("Target", target.to_string())],
            LinkError::InvalidLinkType {
                link_type,
                destination,
                reason,
            } => vec![
                ("LinkType", link_type.to_string()),
                ("Destination", destination.to_string()),
                ("Reason", reason.clone()),
            ],
            LinkError::UnsupportedLinkType { value } => vec![("Value", value.clone())],
            LinkError::ProcessLaunch { command, .. } => vec![("Command", command.clone())],
            LinkError::ConfigParse { path, message } => {
                vec![("Path", path.to_string()), ("Reason", message.clone())]
            },
            LinkError::ConfigValidation { field, reason } => {
                vec![("Field", field.clone()), ("Reason", reason.clone())]
            },
            LinkError::CommandFailed { .. } | LinkError::Io { .. } => Vec::new(),
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            LinkError::PathResolution { .. } => {
                Some("Check that the destination exists and the link's parent directory is present")
            },
            LinkError::InvalidLinkType {
                link_type: LinkType::Junction,
                ..
            } => Some("Junctions can only point at directories; use a symbolic link for files"),
            LinkError::InvalidLinkType {
                link_type: LinkType::Hardlink,
                ..
            } => Some("Hardlinks cannot point at directories; use a junction or symbolic link"),
            LinkError::UnsupportedLinkType { .. } => {
                Some("Use one of: symbolic, junction, hardlink")
            },
            LinkError::ProcessLaunch { .. } => {
                Some("Check the [tool] section of linksmith.toml points at an installed program")
            },
            LinkError::CommandFailed { .. } => {
                Some("Creating symbolic links may require elevated privileges or developer mode")
            },
            _ => None,
        }
    }
}
