//! Tokenizer for document and query text
//!
//! Lowercases the text, then splits on every non-alphanumeric character.
//! Lowercasing comes first because some characters lowercase to a sequence
//! containing combining marks, which must act as separators too. The same
//! function is applied to documents and queries, so a query term
//! matches exactly the terms produced at ingestion.

use crate::types::Term;
use rustc_hash::{FxHashMap, FxHashSet};

/// Tokenize text into normalized terms, in order of appearance.
///
/// Empty or all-punctuation input yields an empty vector.
///
/// # Examples
///
/// ```
/// use vortex_core::tokenize;
///
/// assert_eq!(tokenize("Search-Engines, v2!"), vec!["search", "engines", "v2"]);
/// assert!(tokenize("?!...").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<Term> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|run| !run.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Tokenize and deduplicate, keeping first-occurrence order.
pub fn tokenize_unique(text: &str) -> Vec<Term> {
    let mut seen = FxHashSet::default();
    tokenize(text)
        .into_iter()
        .filter(|term| seen.insert(term.clone()))
        .collect()
}

/// Count occurrences of each distinct term.
///
/// Counts saturate at `u32::MAX`.
pub fn term_frequencies(text: &str) -> FxHashMap<Term, u32> {
    let mut counts: FxHashMap<Term, u32> = FxHashMap::default();
    for term in tokenize(text) {
        let count = counts.entry(term).or_insert(0);
        *count = count.saturating_add(1);
    }
    counts
}
