//! Directory ingestion.

use anyhow::Context;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use vortex_engine::IndexEngine;

use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    pub indexed: usize,
    pub skipped: usize,
    pub removed: usize,
    pub elapsed: Duration,
}

/// Every regular file under `dir` whose extension is `ext`, in path order.
pub fn collect_files(dir: &Path, ext: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = fs::read_dir(&current)
            .with_context(|| format!("reading directory {}", current.display()))?;
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file()
                && has_extension(&path, ext)
            {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

/// Index every matching file under `dir`, assigning ids through `catalog`.
///
/// A file that cannot be read or is not UTF-8 is skipped and its document
/// cleared, so stale postings from an earlier run do not survive. Catalog
/// entries under `dir` that the scan no longer finds (deleted files, or
/// files that stopped matching) are cleared and dropped from the catalog.
/// Entries with another extension that still exist belong to a different
/// scan and are left alone.
pub fn index_directory(
    engine: &IndexEngine,
    catalog: &mut Catalog,
    dir: &Path,
    ext: &str,
) -> anyhow::Result<IndexReport> {
    let start = Instant::now();
    let root = dir
        .canonicalize()
        .with_context(|| format!("resolving {}", dir.display()))?;

    let files = collect_files(&root, ext)?;
    let seen: BTreeSet<&Path> = files.iter().map(PathBuf::as_path).collect();

    let mut indexed = 0;
    let mut skipped = 0;
    for path in &files {
        let doc_id = catalog.id_for(path);
        let outcome = fs::read(path)
            .map_err(vortex_core::Error::from)
            .and_then(|bytes| engine.add_document_bytes(doc_id, &bytes));

        match outcome {
            Ok(()) => {
                debug!(%doc_id, path = %path.display(), "indexed file");
                indexed += 1;
            }
            Err(e) => {
                warn!(%doc_id, path = %path.display(), error = %e, "skipping file");
                engine.add_document(doc_id, "")?;
                skipped += 1;
            }
        }
    }

    let stale: Vec<_> = catalog
        .entries_under(&root)
        .filter(|(_, path)| !seen.contains(path))
        .filter(|(_, path)| has_extension(path, ext) || !path.exists())
        .map(|(doc_id, _)| doc_id)
        .collect();
    for doc_id in &stale {
        engine.add_document(*doc_id, "")?;
        if let Some(path) = catalog.remove(*doc_id) {
            debug!(%doc_id, path = %path.display(), "removed vanished file");
        }
    }

    Ok(IndexReport {
        indexed,
        skipped,
        removed: stale.len(),
        elapsed: start.elapsed(),
    })
}
