//! Durability layer for Vortex
//!
//! This crate persists a [`PostingsStore`](vortex_storage::PostingsStore) as a
//! single versioned binary file:
//! - format: byte layout, encoding and validating decoding
//! - file: atomic promotion (temp file + rename) and whole-file reads
//! - mode: SaveMode (whether to fsync before promotion)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod file;
pub mod format;
pub mod mode;

pub use file::{read_file, write_atomic};
pub use format::{
    decode, encode, FormatError, HEADER_SIZE, INDEX_FORMAT_VERSION, POSTING_SIZE,
};
pub use mode::SaveMode;
