//! Link request validation and normalization
//!
//! Produces an absolute link name and an existence-checked destination, then
//! checks that the destination kind suits the requested link type.

use camino::{Utf8Path, Utf8PathBuf};
use linksmith_core::error::LinkError;
use linksmith_core::report::ErrorReport;
use linksmith_core::types::{LinkRequest, LinkType, ResolvedDestination};
use linksmith_core::utils::absolutize;
use std::fs;
use tracing::debug;

use crate::LinkResult;

pub const JUNCTION_NEEDS_DIRECTORY: &str = "Junction requires a directory destination";
pub const HARDLINK_NEEDS_FILE: &str = "Hardlink requires a non-directory destination";

/// Validate `name`/`destination` for `link_type`, resolving relative paths
/// against `cwd`
pub fn validate_request(
    name: &str,
    destination: &str,
    link_type: LinkType,
    cwd: &Utf8Path,
    report: &ErrorReport,
) -> LinkResult<(LinkRequest, ResolvedDestination)> {
    let name_path = normalize_name(name, cwd, report)?;
    let resolved = resolve_destination(destination, cwd, report)?;

    check_compatibility(link_type, &resolved).map_err(|e| report.fail("validate", e))?;

    debug!(
        name = %name_path,
        destination = %resolved.full_path,
        is_directory = resolved.is_directory,
        "Validated {} request",
        link_type
    );

    let request = LinkRequest {
        name: name_path,
        destination: Utf8PathBuf::from(destination),
        link_type,
    };
    Ok((request, resolved))
}

/// Make the link name absolute and check that its parent directory exists
fn normalize_name(name: &str, cwd: &Utf8Path, report: &ErrorReport) -> LinkResult<Utf8PathBuf> {
    if name.trim().is_empty() {
        return Err(report.fail("validate", LinkError::path_resolution(name, None)));
    }

    let name_path = absolutize(cwd, Utf8Path::new(name));
    let parent = match name_path.parent() {
        Some(parent) if name_path.file_name().is_some() => parent.to_path_buf(),
        _ => {
            return Err(report.fail("validate", LinkError::path_resolution(name_path, None)));
        },
    };

    match fs::metadata(&parent) {
        Ok(metadata) if metadata.is_dir() => Ok(name_path),
        Ok(_) => Err(report.fail("validate", LinkError::path_resolution(parent, None))),
        Err(e) => Err(report.fail("validate", LinkError::path_resolution(parent, Some(e)))),
    }
}

/// Resolve the destination to an existing absolute path
fn resolve_destination(
    destination: &str,
    cwd: &Utf8Path,
    report: &ErrorReport,
) -> LinkResult<ResolvedDestination> {
    if destination.trim().is_empty() {
        return Err(report.fail("validate", LinkError::path_resolution(destination, None)));
    }

    let full_path = absolutize(cwd, Utf8Path::new(destination));
    // Follows symlinks, so a link to a directory counts as a directory
    let metadata = fs::metadata(&full_path)
        .map_err(|e| report.fail("validate", LinkError::path_resolution(destination, Some(e))))?;

    Ok(ResolvedDestination {
        full_path,
        is_directory: metadata.is_dir(),
    })
}

/// Check that the destination kind is allowed for `link_type`
pub fn check_compatibility(link_type: LinkType, destination: &ResolvedDestination) -> LinkResult<()> {
    let (allowed, reason) = if destination.is_directory {
        (link_type.allows_directory(), HARDLINK_NEEDS_FILE)
    } else {
        (link_type.allows_file(), JUNCTION_NEEDS_DIRECTORY)
    };

    if allowed {
        Ok(())
    } else {
        Err(LinkError::invalid_link_type(
            link_type,
            destination.full_path.clone(),
            reason,
        ))
    }
}
