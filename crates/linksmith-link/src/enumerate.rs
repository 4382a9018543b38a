//! Link enumeration
//!
//! Lists the symbolic links and junctions below a directory. Hardlinks are
//! ordinary directory entries and cannot be told apart from the file they
//! share data with, so they never show up here.

use camino::Utf8Path;
use glob::Pattern;
use linksmith_core::error::LinkError;
use linksmith_core::report::ErrorReport;
use linksmith_core::types::LinkEntry;
use linksmith_core::utils::utf8_path;
use std::fs;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::LinkResult;

/// List reparse points under `dir`, direct children only unless `recursive`.
/// `filter` is a glob matched against each entry's file name.
pub fn list_links(
    dir: &Utf8Path,
    filter: Option<&str>,
    recursive: bool,
    report: &ErrorReport,
) -> LinkResult<Vec<LinkEntry>> {
    let pattern = filter
        .map(|filter| {
            Pattern::new(filter).map_err(|e| {
                report.fail(
                    "enumerate",
                    LinkError::ConfigValidation {
                        field: "filter".to_string(),
                        reason: e.to_string(),
                    },
                )
            })
        })
        .transpose()?;

    let metadata = fs::metadata(dir)
        .map_err(|e| report.fail("enumerate", LinkError::path_resolution(dir, Some(e))))?;
    if !metadata.is_dir() {
        return Err(report.fail("enumerate", LinkError::path_resolution(dir, None)));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut links = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                continue;
            },
        };

        if !is_reparse_point(&entry) {
            continue;
        }

        if let Some(pattern) = &pattern {
            let name = entry.file_name().to_string_lossy();
            if !pattern.matches(&name) {
                continue;
            }
        }

        let path = match utf8_path(entry.path().to_path_buf()) {
            Ok(path) => path,
            Err(e) => {
                debug!("Skipping link: {}", e);
                continue;
            },
        };

        let target = fs::read_link(&path).ok().and_then(|target| utf8_path(target).ok());
        // Dangling links count as files
        let is_directory = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);

        links.push(LinkEntry {
            path,
            target,
            is_directory,
        });
    }

    debug!("Found {} links under {}", links.len(), dir);
    Ok(links)
}

#[cfg(windows)]
fn is_reparse_point(entry: &DirEntry) -> bool {
    use std::os::windows::fs::MetadataExt;
    const FILE_ATTRIBUTE_REPARSE_POINT: u32 = 0x400;

    entry
        .metadata()
        .map(|m| m.file_attributes() & FILE_ATTRIBUTE_REPARSE_POINT != 0)
        .unwrap_or(false)
}

#[cfg(not(windows))]
fn is_reparse_point(entry: &DirEntry) -> bool {
    entry.path_is_symlink()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;

    #[test]
    fn test_missing_directory_is_path_resolution_error() {
        let fixture = Fixture::new();
        let missing = fixture.root.join("missing");
        let err = list_links(&missing, None, false, &ErrorReport::default()).unwrap_err();
        match err {
            LinkError::PathResolution { target, source } => {
                assert_eq!(target, missing);
                assert!(source.is_some());
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let fixture = Fixture::new();
        let err = list_links(&fixture.file(), None, false, &ErrorReport::default()).unwrap_err();
        assert!(matches!(err, LinkError::PathResolution { source: None, .. }));
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let fixture = Fixture::new();
        let err = list_links(&fixture.root, Some("[unclosed"), false, &ErrorReport::default()).unwrap_err();
        match err {
            LinkError::ConfigValidation { field, .. } => assert_eq!(field, "filter"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_plain_tree_has_no_links() {
        let fixture = Fixture::new();
        let links = list_links(&fixture.root, None, true, &ErrorReport::default()).unwrap();
        assert!(links.is_empty());
    }

    #[cfg(unix)]
    mod with_symlinks {
        use super::*;
        use std::os::unix::fs::symlink;

        #[test]
        fn test_lists_only_links() {
            let fixture = Fixture::new();
            symlink(fixture.file(), fixture.root.join("to-file")).unwrap();
            symlink(fixture.dir(), fixture.root.join("to-dir")).unwrap();
            fs::hard_link(fixture.file(), fixture.root.join("hard.txt")).unwrap();

            let links = list_links(&fixture.root, None, false, &ErrorReport::default()).unwrap();
            let names: Vec<_> = links.iter().map(|l| l.path.file_name().unwrap()).collect();
            assert_eq!(names, vec!["to-dir", "to-file"]);

            assert_eq!(links[0].target.as_ref(), Some(&fixture.dir()));
            assert!(links[0].is_directory);
            assert_eq!(links[1].target.as_ref(), Some(&fixture.file()));
            assert!(!links[1].is_directory);
        }

        #[test]
        fn test_recursive_descends_but_not_through_links() {
            let fixture = Fixture::new();
            symlink(fixture.file(), fixture.dir().join("nested")).unwrap();
            symlink(fixture.dir(), fixture.root.join("to-dir")).unwrap();

            let shallow = list_links(&fixture.root, None, false, &ErrorReport::default()).unwrap();
            assert_eq!(shallow.len(), 1);

            let deep = list_links(&fixture.root, None, true, &ErrorReport::default()).unwrap();
            let paths: Vec<_> = deep.iter().map(|l| l.path.clone()).collect();
            assert_eq!(paths, vec![fixture.dir().join("nested"), fixture.root.join("to-dir")]);
        }

        #[test]
        fn test_filter_matches_file_name() {
            let fixture = Fixture::new();
            symlink(fixture.file(), fixture.root.join("a.lnk")).unwrap();
            symlink(fixture.file(), fixture.root.join("b.txt")).unwrap();

            let links = list_links(&fixture.root, Some("*.lnk"), false, &ErrorReport::default()).unwrap();
            assert_eq!(links.len(), 1);
            assert_eq!(links[0].path, fixture.root.join("a.lnk"));
        }

        #[test]
        fn test_dangling_link_is_listed() {
            let fixture = Fixture::new();
            symlink(fixture.root.join("gone"), fixture.root.join("dangling")).unwrap();

            let links = list_links(&fixture.root, None, false, &ErrorReport::default()).unwrap();
            assert_eq!(links.len(), 1);
            assert!(!links[0].is_directory);
            assert_eq!(links[0].target.as_ref(), Some(&fixture.root.join("gone")));
        }
    }
}
