//! In-memory postings storage
//!
//! Maps each term to its [`PostingsList`] and keeps a forward index from
//! document to the terms it currently has postings under.
//!
//! # Design
//!
//! - FxHashMap: O(1) term lookup, fast non-crypto hash
//! - PostingsList is keyed by DocId: at most one posting per document
//! - Forward index: `remove_document` touches only that document's terms
//!
//! # Invariants
//!
//! - Every stored frequency is ≥ 1
//! - No empty PostingsList is retained (emptied lists are pruned)
//! - A document appears in the forward index iff it has ≥ 1 posting
//! - `posting_count()` equals the sum of all list lengths

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};
use vortex_core::{DocId, Posting, Term};

/// Returned by [`PostingsStore::lookup`] for absent terms.
static EMPTY_POSTINGS: Lazy<PostingsList> = Lazy::new(PostingsList::new);

/// Postings for a single term, unique by document
///
/// Iteration order is unspecified. Use [`PostingsList::sorted`] when a
/// stable order is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingsList {
    entries: FxHashMap<DocId, u32>,
}

impl PostingsList {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Create a list with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Number of postings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list has no postings
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Frequency recorded for `doc_id`, if any
    pub fn frequency(&self, doc_id: DocId) -> Option<u32> {
        self.entries.get(&doc_id).copied()
    }

    /// Check if `doc_id` has a posting in this list
    pub fn contains(&self, doc_id: DocId) -> bool {
        self.entries.contains_key(&doc_id)
    }

    /// Iterate postings in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = Posting> + '_ {
        self.entries
            .iter()
            .map(|(&doc_id, &frequency)| Posting::new(doc_id, frequency))
    }

    /// Postings sorted by ascending doc id
    pub fn sorted(&self) -> Vec<Posting> {
        let mut postings: Vec<Posting> = self.iter().collect();
        postings.sort_unstable_by_key(|p| p.doc_id);
        postings
    }

    fn insert(&mut self, doc_id: DocId, frequency: u32) -> Option<u32> {
        self.entries.insert(doc_id, frequency)
    }

    fn remove(&mut self, doc_id: DocId) -> Option<u32> {
        self.entries.remove(&doc_id)
    }
}

/// The term → postings map
///
/// # Example
///
/// ```
/// use vortex_core::DocId;
/// use vortex_storage::PostingsStore;
///
/// let mut store = PostingsStore::new();
/// store.upsert("search", DocId::new(0), 2);
/// store.upsert("search", DocId::new(0), 3); // replaces, never appends
///
/// assert_eq!(store.lookup("search").frequency(DocId::new(0)), Some(3));
/// assert!(store.lookup("missing").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingsStore {
    /// Inverted index
    terms: FxHashMap<Term, PostingsList>,
    /// Forward index: document → terms it has postings under
    documents: FxHashMap<DocId, FxHashSet<Term>>,
    /// Total postings across all lists
    postings: usize,
}

impl PostingsStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with room for `terms` distinct terms
    pub fn with_capacity(terms: usize) -> Self {
        Self {
            terms: FxHashMap::with_capacity_and_hasher(terms, Default::default()),
            documents: FxHashMap::default(),
            postings: 0,
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert or replace the posting for `doc_id` under `term`
    ///
    /// Returns the previous frequency, if there was one. A `frequency` of 0
    /// removes the posting instead of storing it.
    pub fn upsert(&mut self, term: impl Into<Term>, doc_id: DocId, frequency: u32) -> Option<u32> {
        let term = term.into();
        if frequency == 0 {
            return self.remove_posting(&term, doc_id);
        }

        let doc_terms = self.documents.entry(doc_id).or_default();
        if !doc_terms.contains(&term) {
            doc_terms.insert(term.clone());
        }

        let previous = self.terms.entry(term).or_default().insert(doc_id, frequency);
        if previous.is_none() {
            self.postings += 1;
        }
        previous
    }

    /// Remove every posting for `doc_id` across all terms
    ///
    /// Returns the number of postings removed (0 for an unknown document).
    /// Terms left without postings are pruned.
    pub fn remove_document(&mut self, doc_id: DocId) -> usize {
        let Some(doc_terms) = self.documents.remove(&doc_id) else {
            return 0;
        };

        let mut removed = 0;
        for term in doc_terms {
            if let Some(list) = self.terms.get_mut(&term) {
                if list.remove(doc_id).is_some() {
                    removed += 1;
                }
                if list.is_empty() {
                    self.terms.remove(&term);
                }
            }
        }

        self.postings -= removed;
        removed
    }

    /// Drop all postings
    pub fn clear(&mut self) {
        self.terms.clear();
        self.documents.clear();
        self.postings = 0;
    }

    fn remove_posting(&mut self, term: &str, doc_id: DocId) -> Option<u32> {
        let list = self.terms.get_mut(term)?;
        let previous = list.remove(doc_id)?;
        if list.is_empty() {
            self.terms.remove(term);
        }

        if let Some(doc_terms) = self.documents.get_mut(&doc_id) {
            doc_terms.remove(term);
            if doc_terms.is_empty() {
                self.documents.remove(&doc_id);
            }
        }

        self.postings -= 1;
        Some(previous)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Postings for `term`; the empty list if the term is absent
    #[inline]
    pub fn lookup(&self, term: &str) -> &PostingsList {
        self.terms.get(term).unwrap_or(&*EMPTY_POSTINGS)
    }

    /// Check if `doc_id` has at least one posting
    pub fn contains_document(&self, doc_id: DocId) -> bool {
        self.documents.contains_key(&doc_id)
    }

    /// Terms `doc_id` currently has postings under, in unspecified order
    pub fn document_terms(&self, doc_id: DocId) -> impl Iterator<Item = &str> + '_ {
        self.documents
            .get(&doc_id)
            .into_iter()
            .flat_map(|terms| terms.iter().map(String::as_str))
    }

    /// Iterate `(term, postings)` pairs in unspecified order
    pub fn terms(&self) -> impl Iterator<Item = (&str, &PostingsList)> + '_ {
        self.terms.iter().map(|(term, list)| (term.as_str(), list))
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of documents with at least one posting
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Total postings across all terms
    pub fn posting_count(&self) -> usize {
        self.postings
    }

    /// Check if the store holds no postings
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
