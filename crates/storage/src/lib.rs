//! Storage layer for Vortex
//!
//! This crate holds the in-memory inverted index:
//! - PostingsList: postings for one term, unique by document
//! - PostingsStore: term → PostingsList map with a forward (document → terms)
//!   index so a document's postings can be dropped without a full scan
//!
//! The store is not synchronized; the engine owns it behind a lock.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod postings;

pub use postings::{PostingsList, PostingsStore};
