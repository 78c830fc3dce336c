//! Help file discovery.
//!
//! Walks the search root recursively and returns every file whose base name
//! matches the configured prefix/extension pair. Excluded directory names
//! are pruned before descent, so an excluded subtree is never visited at
//! all rather than merely filtered from the results.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::core::config::DiscoveryConfig;
use crate::core::errors::{HelpgenError, Result};

/// Discover help files under `root` according to `config`.
///
/// Results are sorted so output is deterministic regardless of the
/// filesystem's directory ordering. Zero matches is not an error.
pub fn discover_help_files(root: &Path, config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(HelpgenError::validation(format!(
            "search root is not a directory: {}",
            root.display()
        )));
    }

    let excluded: HashSet<&str> = config.exclude_dirs.iter().map(String::as_str).collect();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, &excluded));

    let mut found = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| walk_error(root, err))?;
        if !entry.file_type().is_file() {
            continue;
        }

        if matches_pattern(&entry, &config.prefix, &config.extension) {
            debug!("Found: {}", entry.path().display());
            found.push(entry.into_path());
        }
    }

    found.sort();
    info!(
        "Discovered {} help files under {}",
        found.len(),
        root.display()
    );
    Ok(found)
}

/// True when the entry is a directory whose name matches an excluded name.
/// The root itself (depth 0) is never pruned.
fn is_excluded_dir(entry: &DirEntry, excluded: &HashSet<&str>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excluded.contains(name))
}

/// True when the entry's base name starts with `prefix` and ends with
/// `extension`.
fn matches_pattern(entry: &DirEntry, prefix: &str, extension: &str) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with(prefix) && name.ends_with(extension))
}

fn walk_error(root: &Path, err: walkdir::Error) -> HelpgenError {
    let path = err
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| root.display().to_string());
    HelpgenError::io(
        format!("Failed to walk directory tree at {path}"),
        err.into(),
    )
}
