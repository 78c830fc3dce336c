//! Idempotent output writing.
//!
//! The newly rendered bytes are compared against the existing output file
//! before anything is written. When they are identical the file is left
//! untouched, so its modification time does not change and downstream
//! builds are not spuriously invalidated.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::errors::{HelpgenError, Result};

/// Whether a write actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The output file was created or overwritten
    Written,
    /// The output already held identical bytes and was left untouched
    Unchanged,
}

/// Write `bytes` to `path` unless the file already holds exactly `bytes`.
///
/// An existing-but-unreadable output file is an error of the same class as
/// an unreadable input file. No backup of a differing file is kept.
pub fn write_if_changed(path: &Path, bytes: &[u8]) -> Result<WriteOutcome> {
    if path.exists() {
        let existing = fs::read(path).map_err(|e| {
            HelpgenError::io(
                format!("Cannot read existing output file {}", path.display()),
                e,
            )
        })?;

        if existing == bytes {
            debug!("Output {} is up to date", path.display());
            return Ok(WriteOutcome::Unchanged);
        }
    }

    fs::write(path, bytes).map_err(|e| {
        HelpgenError::io(format!("Cannot write output file {}", path.display()), e)
    })?;

    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn writes_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.c");

        let outcome = write_if_changed(&path, b"content").unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(fs::read(&path).unwrap(), b"content");
    }

    #[test]
    fn identical_bytes_leave_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.c");
        fs::write(&path, b"content").unwrap();
        let mtime_before = fs::metadata(&path).unwrap().modified().unwrap();

        // Coarse mtime granularity on some filesystems; make a change
        // detectable if one were to happen.
        std::thread::sleep(Duration::from_millis(20));

        let outcome = write_if_changed(&path, b"content").unwrap();
        assert_eq!(outcome, WriteOutcome::Unchanged);

        let mtime_after = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(mtime_before, mtime_after);
    }

    #[test]
    fn differing_bytes_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.c");
        fs::write(&path, b"old").unwrap();

        let outcome = write_if_changed(&path, b"new").unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let err = write_if_changed(Path::new("/nonexistent/dir/out.c"), b"x").unwrap_err();
        assert!(matches!(err, HelpgenError::Io { .. }));
    }
}
