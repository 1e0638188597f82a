//! Index engine for Vortex
//!
//! [`IndexEngine`] owns the postings store and exposes the whole boundary:
//! ingestion with overwrite semantics, ranked multi-term search, and
//! save/load of the single-file index.
//!
//! The engine is `Send + Sync`. Share one instance between request handlers
//! through an `Arc<IndexEngine>`; all synchronization is internal.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
mod query;

pub use config::{EngineBuilder, EngineConfig};
pub use engine::{IndexEngine, IndexStats};
pub use vortex_durability::SaveMode;
