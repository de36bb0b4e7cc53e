#![deny(missing_docs)]

//! # Backup Manager
//!
//! Scoped pre-mutation snapshots. A backup is taken strictly before the
//! mutation it guards, so the `.bak` sibling always holds pre-patch content.

use crate::error::AppResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Copies `path` verbatim to `<path>.bak`, overwriting any previous backup.
///
/// Returns `Ok(None)` when the file does not exist. Absence is never an
/// error: the caller may be about to create the file for the first time, in
/// which case there is nothing to snapshot.
pub fn create_backup(path: &Path) -> AppResult<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    let mut bak = path.as_os_str().to_owned();
    bak.push(".bak");
    let bak = PathBuf::from(bak);

    fs::copy(path, &bak)?;
    Ok(Some(bak))
}
