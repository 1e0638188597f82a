//! Output formatting for human and JSON modes.

use serde_json::{json, Value};
use vortex_core::SearchHit;
use vortex_engine::IndexStats;

use crate::catalog::Catalog;
use crate::indexer::IndexReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Render ranked hits, resolving ids through the catalog where possible.
pub fn format_hits(hits: &[SearchHit], catalog: &Catalog, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => {
            if hits.is_empty() {
                return "(no matches)".to_string();
            }
            hits.iter()
                .enumerate()
                .map(|(i, hit)| {
                    let name = catalog
                        .path(hit.doc_id)
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| format!("doc {}", hit.doc_id));
                    format!("{}) {} (frequency {})", i + 1, name, hit.frequency)
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        OutputMode::Json => {
            let rows: Vec<Value> = hits
                .iter()
                .map(|hit| {
                    json!({
                        "doc_id": hit.doc_id.as_u64(),
                        "frequency": hit.frequency,
                        "path": catalog.path(hit.doc_id).map(|p| p.display().to_string()),
                    })
                })
                .collect();
            Value::Array(rows).to_string()
        }
    }
}

pub fn format_stats(stats: &IndexStats, documents_in_catalog: usize, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!(
            "terms: {}\ndocuments: {}\npostings: {}\ncatalog entries: {}",
            stats.terms, stats.documents, stats.postings, documents_in_catalog
        ),
        OutputMode::Json => json!({
            "terms": stats.terms,
            "documents": stats.documents,
            "postings": stats.postings,
            "catalog_entries": documents_in_catalog,
        })
        .to_string(),
    }
}

pub fn format_report(report: &IndexReport, mode: OutputMode) -> String {
    let millis = report.elapsed.as_millis();
    match mode {
        OutputMode::Human => {
            let mut out = format!("Indexed {} files in {} ms", report.indexed, millis);
            if report.skipped > 0 {
                out.push_str(&format!(" ({} skipped)", report.skipped));
            }
            if report.removed > 0 {
                out.push_str(&format!(", removed {} missing", report.removed));
            }
            out
        }
        OutputMode::Json => json!({
            "indexed": report.indexed,
            "skipped": report.skipped,
            "removed": report.removed,
            "elapsed_ms": millis as u64,
        })
        .to_string(),
    }
}

pub fn format_error(err: &anyhow::Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("(error) {:#}", err),
        OutputMode::Json => json!({ "error": format!("{:#}", err) }).to_string(),
    }
}
