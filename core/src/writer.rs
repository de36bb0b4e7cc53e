#![deny(missing_docs)]

//! # Diff-Gated Writer
//!
//! Commits candidate content only when it differs from what was read, taking
//! the pre-mutation backup first. This layer is what makes re-running a patch
//! pipeline on an already-integrated entry a no-op: equal content means no
//! backup and no write.

use crate::backup::create_backup;
use crate::error::AppResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a gated write.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Whether the file was rewritten.
    pub written: bool,
    /// Path of the `.bak` sibling, when one was taken.
    pub backup: Option<PathBuf>,
}

/// Writes `candidate` to `path` only if it differs from `original`.
///
/// A backup is taken only when `backup` is requested and a write will
/// actually happen, and strictly before that write. The write replaces the
/// whole file content in a single operation.
pub fn commit(
    path: &Path,
    original: &str,
    candidate: &str,
    backup: bool,
) -> AppResult<WriteOutcome> {
    if candidate == original {
        return Ok(WriteOutcome::default());
    }

    let backup_path = if backup { create_backup(path)? } else { None };
    fs::write(path, candidate)?;

    Ok(WriteOutcome {
        written: true,
        backup: backup_path,
    })
}
