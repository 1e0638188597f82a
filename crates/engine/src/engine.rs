//! The index engine
//!
//! ## Locking
//!
//! ```text
//! add_document   tokenize (no lock) → write lock: remove_document + upserts
//! search         tokenize (no lock) → read lock: aggregate → rank (no lock)
//! save           persist lock → read lock: encode → write file (store unlocked)
//! load           persist lock → read + decode (store unlocked) → write lock: swap
//! ```
//!
//! The store lock is never held across file I/O. A reader therefore sees
//! either the state before or after any single `add_document` or `load`,
//! never a partially applied one. The persist lock keeps two `save`/`load`
//! calls on one engine from interleaving their file operations.

use crate::config::{EngineBuilder, EngineConfig};
use crate::query;
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};
use vortex_core::{term_frequencies, tokenize_unique, DocId, Error, Result, SearchHit};
use vortex_durability::{decode, encode, read_file, write_atomic};
use vortex_storage::PostingsStore;

/// Counts describing the current index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Distinct terms
    pub terms: usize,
    /// Documents with at least one posting
    pub documents: usize,
    /// Total postings
    pub postings: usize,
}

/// Inverted index over caller-identified documents.
///
/// # Example
///
/// ```
/// use vortex_core::DocId;
/// use vortex_engine::IndexEngine;
///
/// let engine = IndexEngine::new();
/// engine.add_document(DocId::new(0), "search engines index text").unwrap();
/// engine.add_document(DocId::new(1), "engines engines engines").unwrap();
///
/// let hits = engine.search("engines");
/// assert_eq!(hits[0].doc_id, DocId::new(1));
/// assert_eq!(hits[0].frequency, 3);
/// ```
///
/// # Thread Safety
///
/// All methods take `&self`. `search` calls run in parallel with each other;
/// `add_document` and `load` are exclusive with everything else.
pub struct IndexEngine {
    store: RwLock<PostingsStore>,
    persist_lock: Mutex<()>,
    config: EngineConfig,
}

impl IndexEngine {
    /// Create an engine with an empty index and default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with an empty index
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            store: RwLock::new(PostingsStore::new()),
            persist_lock: Mutex::new(()),
            config,
        }
    }

    /// Create a builder for engine configuration
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// The configuration this engine was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========================================================================
    // Ingestion
    // ========================================================================

    /// Index `text` as the full content of `doc_id`
    ///
    /// Any postings from an earlier call for the same `doc_id` are dropped
    /// first, so the index reflects only the latest text. Repeating a call
    /// with identical arguments leaves the index unchanged. Empty text
    /// clears the document.
    pub fn add_document(&self, doc_id: DocId, text: &str) -> Result<()> {
        let counts = term_frequencies(text);
        let distinct = counts.len();

        let replaced = {
            let mut store = self.store.write();
            let replaced = store.remove_document(doc_id);
            for (term, count) in counts {
                store.upsert(term, doc_id, count);
            }
            replaced
        };

        debug!(%doc_id, terms = distinct, replaced, "indexed document");
        Ok(())
    }

    /// Index raw bytes as the content of `doc_id`
    ///
    /// Returns [`Error::InvalidInput`] without touching the index if the
    /// bytes are not UTF-8.
    pub fn add_document_bytes(&self, doc_id: DocId, bytes: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            Error::InvalidInput(format!("document {} is not valid UTF-8: {}", doc_id, e))
        })?;
        self.add_document(doc_id, text)
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Documents matching any term of `query`, best first
    ///
    /// Each hit's frequency is the sum of the document's frequencies for
    /// the distinct query terms. Ties are broken by ascending doc id.
    /// An empty query or one made only of unknown terms returns nothing.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let terms = tokenize_unique(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let scores = {
            let store = self.store.read();
            query::aggregate(&store, &terms)
        };
        let hits = query::rank(scores);

        debug!(terms = terms.len(), hits = hits.len(), "search");
        hits
    }

    /// Current index counts
    pub fn stats(&self) -> IndexStats {
        Self::stats_of(&self.store.read())
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Write the index to `path`
    ///
    /// The file is written to a temporary sibling and renamed into place,
    /// so an existing file at `path` is only replaced by a complete one.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let start = Instant::now();
        let _persist = self.persist_lock.lock();

        let (bytes, stats) = {
            let store = self.store.read();
            let bytes = encode(&store)?;
            (bytes, Self::stats_of(&store))
        };
        write_atomic(path, &bytes, self.config.save_mode)?;

        info!(
            path = %path.display(),
            terms = stats.terms,
            postings = stats.postings,
            bytes = bytes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "saved index"
        );
        Ok(())
    }

    /// Replace the index with the contents of `path`
    ///
    /// On any error ([`Error::Io`] or [`Error::CorruptIndex`]) the current
    /// index is left exactly as it was. On success it is replaced, not
    /// merged.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let start = Instant::now();
        let _persist = self.persist_lock.lock();

        let bytes = read_file(path)?;
        let loaded = decode(&bytes)?;
        let stats = Self::stats_of(&loaded);

        *self.store.write() = loaded;

        info!(
            path = %path.display(),
            terms = stats.terms,
            postings = stats.postings,
            bytes = bytes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "loaded index"
        );
        Ok(())
    }

    fn stats_of(store: &PostingsStore) -> IndexStats {
        IndexStats {
            terms: store.term_count(),
            documents: store.document_count(),
            postings: store.posting_count(),
        }
    }
}

impl Default for IndexEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IndexEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexEngine")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}
