//! Query semantics: OR matching, aggregation and ranking order.

use crate::common::*;

// ============================================================================
// Reference Corpus
// ============================================================================

#[test]
fn single_term_query() {
    let engine = engine_with_corpus();
    assert_eq!(pairs(&engine.search("search")), vec![(0, 1), (2, 1)]);
}

#[test]
fn multi_term_query_matches_any_term() {
    let engine = engine_with_corpus();
    // doc 0 has both terms, docs 2 and 3 one each
    assert_eq!(
        pairs(&engine.search("search engines")),
        vec![(0, 2), (2, 1), (3, 1)]
    );
}

#[test]
fn query_text_is_tokenized_like_documents() {
    let engine = engine_with_corpus();
    assert_eq!(
        pairs(&engine.search("  SEARCH!!  ")),
        pairs(&engine.search("search"))
    );
}

#[test]
fn unknown_terms_contribute_nothing() {
    let engine = engine_with_corpus();
    assert!(engine.search("zebra").is_empty());
    assert_eq!(
        pairs(&engine.search("zebra fuel")),
        vec![(3, 1)]
    );
}

#[test]
fn empty_and_punctuation_queries_return_nothing() {
    let engine = engine_with_corpus();
    assert!(engine.search("").is_empty());
    assert!(engine.search("?! -- ...").is_empty());
}

#[test]
fn search_on_empty_index() {
    let engine = IndexEngine::new();
    assert!(engine.search("anything").is_empty());
}

// ============================================================================
// Aggregation and Ranking
// ============================================================================

#[test]
fn repeated_query_terms_count_once() {
    let engine = engine_with_corpus();
    assert_eq!(
        pairs(&engine.search("search search SEARCH")),
        pairs(&engine.search("search"))
    );
}

#[test]
fn frequencies_sum_across_query_terms() {
    let engine = IndexEngine::new();
    engine
        .add_document(DocId::new(1), "red red red blue")
        .unwrap();
    engine.add_document(DocId::new(2), "blue blue").unwrap();

    assert_eq!(pairs(&engine.search("red blue")), vec![(1, 4), (2, 2)]);
}

#[test]
fn higher_frequency_ranks_first() {
    let engine = IndexEngine::new();
    engine.add_document(DocId::new(1), "cat").unwrap();
    engine.add_document(DocId::new(2), "cat cat cat").unwrap();
    engine.add_document(DocId::new(3), "cat cat").unwrap();

    assert_eq!(
        pairs(&engine.search("cat")),
        vec![(2, 3), (3, 2), (1, 1)]
    );
}

#[test]
fn ties_break_by_ascending_doc_id() {
    let engine = IndexEngine::new();
    for id in [40, 7, 19, 3] {
        engine.add_document(DocId::new(id), "tie").unwrap();
    }

    assert_eq!(
        pairs(&engine.search("tie")),
        vec![(3, 1), (7, 1), (19, 1), (40, 1)]
    );
}

#[test]
fn results_are_deterministic() {
    let engine = engine_with_corpus();
    let first = engine.search("search engines text fuel");
    for _ in 0..10 {
        assert_eq!(engine.search("search engines text fuel"), first);
    }
}
