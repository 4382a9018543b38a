//! Path utilities for link request normalization.
//!
//! Provides lexical normalization and absolute-path construction. Nothing in
//! here touches the filesystem.

use crate::error::{LinkError, LinkResult};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use std::path::PathBuf;

/// Normalize a path by resolving . and .. components
pub fn normalize_path(path: &Utf8Path) -> Utf8PathBuf {
    let mut components: Vec<Utf8Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Utf8Component::CurDir => {
                // Skip current directory
            },
            Utf8Component::ParentDir => match components.last() {
                Some(Utf8Component::Normal(_)) => {
                    components.pop();
                },
                Some(Utf8Component::RootDir) | Some(Utf8Component::Prefix(_)) => {
                    // ".." at the root stays at the root
                },
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }

    let mut normalized = Utf8PathBuf::new();
    for component in components {
        normalized.push(component.as_str());
    }
    normalized
}

/// Make `path` absolute against `cwd` and normalize it
pub fn absolutize(cwd: &Utf8Path, path: &Utf8Path) -> Utf8PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&cwd.join(path))
    }
}

/// Convert a std path into a UTF-8 path
pub fn utf8_path(path: PathBuf) -> LinkResult<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|path| LinkError::path_resolution(path.to_string_lossy().into_owned(), None))
}
