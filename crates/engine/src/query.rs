//! Query evaluation: OR across distinct terms, summed frequencies.

use rustc_hash::FxHashMap;
use vortex_core::{DocId, SearchHit, Term};
use vortex_storage::PostingsStore;

/// Sum each document's frequencies over `terms`
///
/// `terms` must already be distinct; a repeated term would count twice.
pub(crate) fn aggregate(store: &PostingsStore, terms: &[Term]) -> FxHashMap<DocId, u64> {
    let mut scores: FxHashMap<DocId, u64> = FxHashMap::default();
    for term in terms {
        for posting in store.lookup(term).iter() {
            let score = scores.entry(posting.doc_id).or_insert(0);
            *score = score.saturating_add(u64::from(posting.frequency));
        }
    }
    scores
}

/// Order by aggregate frequency descending, then doc id ascending
pub(crate) fn rank(scores: FxHashMap<DocId, u64>) -> Vec<SearchHit> {
    let mut hits: Vec<SearchHit> = scores
        .into_iter()
        .filter(|&(_, frequency)| frequency > 0)
        .map(|(doc_id, frequency)| SearchHit::new(doc_id, frequency))
        .collect();
    hits.sort_unstable_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.doc_id.cmp(&b.doc_id))
    });
    hits
}
