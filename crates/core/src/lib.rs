//! Core types for the Vortex search engine
//!
//! This crate defines the vocabulary shared by every other layer:
//! - [`DocId`], [`Posting`], [`SearchHit`]: plain value types crossing the engine boundary
//! - [`Error`] / [`Result`]: the three error kinds surfaced to callers
//! - [`tokenizer`]: the text → term normalization used for documents and queries

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod tokenizer;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use tokenizer::{term_frequencies, tokenize, tokenize_unique};
pub use types::{DocId, Posting, SearchHit, Term};
