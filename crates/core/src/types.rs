//! Core value types
//!
//! - [`DocId`]: caller-assigned document identifier, opaque to the engine
//! - [`Term`]: a normalized token
//! - [`Posting`]: one term's frequency in one document
//! - [`SearchHit`]: one ranked query result

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// A normalized term (lowercased alphanumeric run).
///
/// Equality is byte-exact; the tokenizer is the only producer of terms.
pub type Term = String;

/// Identifier of an indexed document
///
/// Ids are chosen by the caller (typically the layer that owns the
/// id ↔ path mapping). The engine only compares and orders them.
///
/// # Examples
///
/// ```
/// use vortex_core::DocId;
///
/// let id = DocId::new(7);
/// assert_eq!(id.as_u64(), 7);
/// assert!(DocId::try_from(-1i64).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DocId(u64);

impl DocId {
    /// Create a DocId from a raw integer
    pub const fn new(id: u64) -> Self {
        DocId(id)
    }

    /// Raw integer value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId(id)
    }
}

impl From<DocId> for u64 {
    fn from(id: DocId) -> Self {
        id.0
    }
}

impl TryFrom<i64> for DocId {
    type Error = Error;

    /// Negative ids are rejected with [`Error::InvalidInput`].
    fn try_from(id: i64) -> Result<Self, Self::Error> {
        u64::try_from(id)
            .map(DocId)
            .map_err(|_| Error::InvalidInput(format!("document id must be non-negative, got {}", id)))
    }
}

impl std::fmt::Display for DocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Occurrence count of one term within one document
///
/// `frequency` is always ≥ 1; zero-count postings are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Posting {
    /// Document containing the term
    pub doc_id: DocId,
    /// Number of occurrences in that document's latest ingested text
    pub frequency: u32,
}

impl Posting {
    /// Create a posting
    pub fn new(doc_id: DocId, frequency: u32) -> Self {
        Self { doc_id, frequency }
    }
}

/// A ranked query result
///
/// `frequency` is the aggregate: the sum of the per-term frequencies of
/// every distinct query term the document matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchHit {
    /// Matching document
    pub doc_id: DocId,
    /// Aggregate frequency across matched query terms
    pub frequency: u64,
}

impl SearchHit {
    /// Create a hit
    pub fn new(doc_id: DocId, frequency: u64) -> Self {
        Self { doc_id, frequency }
    }
}

impl From<(u64, u64)> for SearchHit {
    fn from((doc_id, frequency): (u64, u64)) -> Self {
        Self::new(DocId(doc_id), frequency)
    }
}
