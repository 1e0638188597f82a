//! # Vortex
//!
//! Embedded inverted-index search engine with single-file persistence.
//!
//! Documents are identified by caller-chosen numeric ids. Text is tokenized
//! into lowercase alphanumeric terms, each term maps to the documents that
//! contain it, and a query returns every document matching any of its terms,
//! ranked by how often those terms occur.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vortex::prelude::*;
//!
//! # fn main() -> vortex::Result<()> {
//! let engine = IndexEngine::new();
//! engine.add_document(DocId::new(0), "Search engines index text")?;
//! engine.add_document(DocId::new(1), "engines engines")?;
//!
//! for hit in engine.search("search engines") {
//!     println!("{} {}", hit.doc_id, hit.frequency);
//! }
//!
//! engine.save("docs.index")?;
//! engine.load("docs.index")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crates
//!
//! - [`vortex_core`] - ids, hits, the tokenizer and the error type
//! - [`vortex_storage`] - the in-memory postings store
//! - [`vortex_durability`] - the binary index format and atomic file writes
//! - [`vortex_engine`] - [`IndexEngine`], the thread-safe front door

#![warn(missing_docs)]

pub mod prelude;

pub use vortex_core::{
    term_frequencies, tokenize, tokenize_unique, DocId, Error, ErrorKind, Posting, Result,
    SearchHit, Term,
};
pub use vortex_durability::{FormatError, SaveMode, INDEX_FORMAT_VERSION};
pub use vortex_engine::{EngineBuilder, EngineConfig, IndexEngine, IndexStats};
pub use vortex_storage::{PostingsList, PostingsStore};
