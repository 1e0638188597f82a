//! On-disk byte format for the index file
//!
//! ```text
//! [version:u32][term_count:u32]
//! { [term_len:u32][term_bytes][posting_count:u32] { [doc_id:u64][frequency:u32] }* }*
//! ```
//!
//! All integers are little-endian. Encoding is canonical: terms are written
//! in bytewise order and postings in ascending doc id order, so two
//! query-equivalent stores encode to identical bytes.
//!
//! Decoding never trusts a count: every length is checked against the bytes
//! remaining before anything is allocated or read.

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use rustc_hash::FxHashSet;
use std::io::{self, Write};
use thiserror::Error;
use vortex_core::DocId;
use vortex_storage::PostingsStore;

/// Current index format version
pub const INDEX_FORMAT_VERSION: u32 = 1;

/// Size of the file header (version + term count)
pub const HEADER_SIZE: usize = 8;

/// Size of one encoded posting (doc id + frequency)
pub const POSTING_SIZE: usize = 12;

/// Fixed bytes per term besides the term itself (term length + posting count)
const TERM_OVERHEAD: usize = 8;

/// Reasons a byte stream is not a valid index
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// Header names a version this build does not understand
    #[error("unsupported index format version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the header
        found: u32,
        /// Version this build reads
        expected: u32,
    },

    /// A count or length runs past the end of the stream
    #[error("truncated at offset {offset}: need {needed} bytes, have {available}")]
    Truncated {
        /// Offset where the read was attempted
        offset: usize,
        /// Bytes required
        needed: usize,
        /// Bytes remaining
        available: usize,
    },

    /// Term bytes are not UTF-8
    #[error("term at offset {offset} is not valid UTF-8")]
    InvalidTerm {
        /// Offset of the term length field
        offset: usize,
    },

    /// Term has length 0
    #[error("empty term at offset {offset}")]
    EmptyTerm {
        /// Offset of the term length field
        offset: usize,
    },

    /// Same term encoded twice
    #[error("duplicate term {term:?}")]
    DuplicateTerm {
        /// The repeated term
        term: String,
    },

    /// Same document listed twice under one term
    #[error("duplicate posting for document {doc_id} under term {term:?}")]
    DuplicatePosting {
        /// Term whose list repeats the document
        term: String,
        /// The repeated document
        doc_id: u64,
    },

    /// A posting with frequency 0
    #[error("zero frequency for document {doc_id} under term {term:?}")]
    ZeroFrequency {
        /// Term holding the posting
        term: String,
        /// Document of the posting
        doc_id: u64,
    },

    /// Bytes left after the last declared term
    #[error("{remaining} trailing bytes after last term")]
    TrailingBytes {
        /// Number of unread bytes
        remaining: usize,
    },
}

impl From<FormatError> for vortex_core::Error {
    fn from(e: FormatError) -> Self {
        vortex_core::Error::CorruptIndex(e.to_string())
    }
}

fn len_u32(len: usize, what: &str) -> io::Result<u32> {
    u32::try_from(len).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} {} exceeds the u32 range of the index format", what, len),
        )
    })
}

/// Exact encoded size of `store`
pub fn encoded_len(store: &PostingsStore) -> usize {
    HEADER_SIZE
        + store
            .terms()
            .map(|(term, list)| TERM_OVERHEAD + term.len() + list.len() * POSTING_SIZE)
            .sum::<usize>()
}

/// Encode `store` into a fresh buffer
///
/// Fails only if a length does not fit the format's `u32` fields.
pub fn encode(store: &PostingsStore) -> io::Result<Vec<u8>> {
    let mut terms: Vec<_> = store.terms().collect();
    terms.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut buf = Vec::with_capacity(encoded_len(store));
    buf.write_u32::<LittleEndian>(INDEX_FORMAT_VERSION)?;
    buf.write_u32::<LittleEndian>(len_u32(terms.len(), "term count")?)?;

    for (term, list) in terms {
        buf.write_u32::<LittleEndian>(len_u32(term.len(), "term length")?)?;
        buf.write_all(term.as_bytes())?;
        buf.write_u32::<LittleEndian>(len_u32(list.len(), "posting count")?)?;
        for posting in list.sorted() {
            buf.write_u64::<LittleEndian>(posting.doc_id.as_u64())?;
            buf.write_u32::<LittleEndian>(posting.frequency)?;
        }
    }

    Ok(buf)
}

/// Bounds-checked cursor over the input
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn ensure(&self, needed: usize) -> Result<(), FormatError> {
        if needed > self.remaining() {
            return Err(FormatError::Truncated {
                offset: self.pos,
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], FormatError> {
        self.ensure(n)?;
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn read_u32(&mut self) -> Result<u32, FormatError> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    fn read_u64(&mut self) -> Result<u64, FormatError> {
        Ok(LittleEndian::read_u64(self.take(8)?))
    }
}

/// Decode a complete index file
///
/// Either the whole stream is valid and a new store is returned, or an
/// error names the first inconsistency. Terms declared with zero postings
/// are accepted and contribute nothing.
pub fn decode(bytes: &[u8]) -> Result<PostingsStore, FormatError> {
    let mut reader = Reader::new(bytes);

    let version = reader.read_u32()?;
    if version != INDEX_FORMAT_VERSION {
        return Err(FormatError::UnsupportedVersion {
            found: version,
            expected: INDEX_FORMAT_VERSION,
        });
    }

    let term_count = reader.read_u32()? as usize;
    reader.ensure(term_count.saturating_mul(TERM_OVERHEAD))?;

    let mut store = PostingsStore::with_capacity(term_count);
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for _ in 0..term_count {
        let offset = reader.position();
        let term_len = reader.read_u32()? as usize;
        let term_bytes = reader.take(term_len)?;
        if term_bytes.is_empty() {
            return Err(FormatError::EmptyTerm { offset });
        }
        let term =
            std::str::from_utf8(term_bytes).map_err(|_| FormatError::InvalidTerm { offset })?;
        if !seen.insert(term) {
            return Err(FormatError::DuplicateTerm {
                term: term.to_string(),
            });
        }

        let posting_count = reader.read_u32()? as usize;
        reader.ensure(posting_count.saturating_mul(POSTING_SIZE))?;

        for _ in 0..posting_count {
            let doc_id = reader.read_u64()?;
            let frequency = reader.read_u32()?;
            if frequency == 0 {
                return Err(FormatError::ZeroFrequency {
                    term: term.to_string(),
                    doc_id,
                });
            }
            if store.upsert(term, DocId::new(doc_id), frequency).is_some() {
                return Err(FormatError::DuplicatePosting {
                    term: term.to_string(),
                    doc_id,
                });
            }
        }
    }

    if reader.remaining() > 0 {
        return Err(FormatError::TrailingBytes {
            remaining: reader.remaining(),
        });
    }

    Ok(store)
}
