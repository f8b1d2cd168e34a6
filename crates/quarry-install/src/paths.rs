//! Deterministic path derivation from a package URI.

use std::path::{Path, PathBuf};

use crate::format::SUFFIXES;

/// Where one install run downloads and extracts its package.
///
/// Both paths are pure functions of the packages root and the URI, so a
/// re-run derives the same layout and overwrites in place. The extraction
/// directory is a sibling of the download file, never a subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    pub download: PathBuf,
    pub extraction: PathBuf,
}

impl InstallPaths {
    /// Derive the download file and extraction directory for a package
    /// URI.
    pub fn derive(packages_root: &Path, package_uri: &str) -> InstallPaths {
        let file_name = uri_file_name(package_uri);
        InstallPaths {
            download: packages_root.join(file_name),
            extraction: packages_root.join(strip_archive_suffix(file_name)),
        }
    }
}

/// Final path segment of a URI, with any query or fragment dropped.
pub fn uri_file_name(uri: &str) -> &str {
    let path = uri.split(['?', '#']).next().unwrap_or(uri);
    path.rsplit('/').next().unwrap_or(path)
}

/// Strip a recognized archive suffix from a file name, falling back to
/// stripping the single final extension.
pub fn strip_archive_suffix(file_name: &str) -> &str {
    for (suffix, _) in SUFFIXES {
        if let Some(stem) = file_name.strip_suffix(suffix) {
            if !stem.is_empty() {
                return stem;
            }
        }
    }
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    }
}
