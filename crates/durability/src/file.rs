//! Index file I/O
//!
//! Writes go to a temporary file in the target's directory and are promoted
//! with a rename, so the target path never holds a partially written index.
//! If anything fails before the rename, the temporary file is removed and
//! the previous file (if any) is untouched.

use crate::mode::SaveMode;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Atomically replace `path` with `bytes`
///
/// The temporary file is created next to `path` so the final rename stays
/// on one filesystem.
pub fn write_atomic(path: &Path, bytes: &[u8], mode: SaveMode) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    if mode.requires_fsync() {
        tmp.as_file().sync_all()?;
    }

    tmp.persist(path).map_err(|e| e.error)?;

    if mode.requires_fsync() {
        sync_dir(dir)?;
    }

    debug!(path = %path.display(), bytes = bytes.len(), ?mode, "promoted index file");
    Ok(())
}

/// Read a whole index file into memory
pub fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read index file");
    Ok(bytes)
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
