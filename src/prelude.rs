//! Convenient imports for Vortex.
//!
//! ```
//! use vortex::prelude::*;
//!
//! let engine = IndexEngine::new();
//! engine.add_document(DocId::new(7), "hello world").unwrap();
//! assert_eq!(engine.search("hello"), vec![SearchHit::new(DocId::new(7), 1)]);
//! ```

// Main entry point
pub use crate::{EngineBuilder, IndexEngine, IndexStats, SaveMode};

// Error handling
pub use crate::{Error, ErrorKind, Result};

// Core types
pub use crate::{DocId, SearchHit};
