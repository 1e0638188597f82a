//! Vortex CLI: build a keyword index over a directory of text files and
//! query it.
//!
//! ```text
//! vortex index ./docs            # scan, index and save
//! vortex search search engines   # OR query, best match first
//! vortex stats                   # term / document / posting counts
//! vortex verify                  # check the index file decodes
//! ```
//!
//! Logs go to stderr; results go to stdout.

mod catalog;
mod commands;
mod format;
mod indexer;
mod parse;

use std::process;

use anyhow::Context;
use tracing::info;
use vortex_engine::{IndexEngine, SaveMode};

use catalog::Catalog;
use commands::build_cli;
use format::{format_error, format_hits, format_report, format_stats, OutputMode};
use parse::{matches_to_action, CliAction, Options};

fn main() {
    let matches = build_cli().get_matches();

    let (options, action) = match matches_to_action(&matches) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(options.log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&options, action) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, options.output));
            process::exit(1);
        }
    }
}

fn run(options: &Options, action: CliAction) -> anyhow::Result<String> {
    match action {
        CliAction::Index { dir, ext, strict } => {
            let mode = if strict {
                SaveMode::Strict
            } else {
                SaveMode::Buffered
            };
            let mut catalog = Catalog::load_for_index(&options.catalog, &options.index)?;
            let engine = IndexEngine::builder().save_mode(mode).build();
            if options.index.exists() {
                load_index(&engine, options)?;
            }

            let report = indexer::index_directory(&engine, &mut catalog, &dir, &ext)?;

            save_all(&engine, &catalog, options, mode)?;
            info!(
                files = report.indexed,
                skipped = report.skipped,
                removed = report.removed,
                catalog = catalog.len(),
                "index updated"
            );
            Ok(format_report(&report, options.output))
        }
        CliAction::Search { query } => {
            let engine = IndexEngine::new();
            load_index(&engine, options)?;
            let catalog = Catalog::load_or_default(&options.catalog)?;
            let hits = engine.search(&query);
            Ok(format_hits(&hits, &catalog, options.output))
        }
        CliAction::Stats => {
            let engine = IndexEngine::new();
            load_index(&engine, options)?;
            let catalog = Catalog::load_or_default(&options.catalog)?;
            Ok(format_stats(&engine.stats(), catalog.len(), options.output))
        }
        CliAction::Verify => {
            let engine = IndexEngine::new();
            load_index(&engine, options)?;
            Catalog::load_or_default(&options.catalog)?;
            let stats = engine.stats();
            Ok(match options.output {
                OutputMode::Human => format!(
                    "OK: {} terms, {} documents, {} postings",
                    stats.terms, stats.documents, stats.postings
                ),
                OutputMode::Json => serde_json::json!({ "ok": true, "stats": stats }).to_string(),
            })
        }
    }
}

/// Persist the catalog, then the index.
///
/// The catalog goes first so the saved id table always covers every id the
/// saved index refers to.
fn save_all(
    engine: &IndexEngine,
    catalog: &Catalog,
    options: &Options,
    mode: SaveMode,
) -> anyhow::Result<()> {
    catalog.save(&options.catalog, mode)?;
    engine
        .save(&options.index)
        .with_context(|| format!("saving index {}", options.index.display()))
}

fn load_index(engine: &IndexEngine, options: &Options) -> anyhow::Result<()> {
    engine
        .load(&options.index)
        .with_context(|| format!("loading index {}", options.index.display()))
}
