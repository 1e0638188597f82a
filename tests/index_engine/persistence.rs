//! Save/load: round trips, on-disk layout, atomic replacement and
//! all-or-nothing loading.

use crate::common::*;
use std::fs;

fn le32(v: u32) -> [u8; 4] {
    v.to_le_bytes()
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn save_then_load_answers_queries_identically() {
    let (_dir, path) = scratch();
    let original = engine_with_corpus();
    original.save(&path).unwrap();

    let restored = IndexEngine::new();
    restored.load(&path).unwrap();

    assert_eq!(restored.stats(), original.stats());
    for query in ["search", "engines", "search engines", "text fuel", "zebra"] {
        assert_eq!(restored.search(query), original.search(query), "{}", query);
    }
}

#[test]
fn empty_index_round_trips() {
    let (_dir, path) = scratch();
    IndexEngine::new().save(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let mut expected = Vec::new();
    expected.extend_from_slice(&le32(INDEX_FORMAT_VERSION));
    expected.extend_from_slice(&le32(0));
    assert_eq!(bytes, expected);

    let engine = engine_with_corpus();
    engine.load(&path).unwrap();
    assert_eq!(engine.stats(), IndexStats::default());
}

#[test]
fn save_is_same_across_modes() {
    test_across_modes("save_load", |engine, path| {
        for (id, text) in CORPUS {
            engine.add_document(DocId::new(id), text).unwrap();
        }
        engine.save(path).unwrap();
        let bytes = fs::read(path).unwrap();

        let restored = IndexEngine::new();
        restored.load(path).unwrap();
        (bytes, restored.search("search engines"))
    });
}

#[test]
fn load_replaces_rather_than_merges() {
    let (_dir, path) = scratch();
    let saved = IndexEngine::new();
    saved.add_document(DocId::new(9), "only this").unwrap();
    saved.save(&path).unwrap();

    let engine = engine_with_corpus();
    engine.load(&path).unwrap();

    assert!(engine.search("search").is_empty());
    assert_eq!(pairs(&engine.search("only")), vec![(9, 1)]);
    assert_eq!(engine.stats().documents, 1);
}

#[test]
fn loaded_index_accepts_overwrites() {
    let (_dir, path) = scratch();
    engine_with_corpus().save(&path).unwrap();

    let engine = IndexEngine::new();
    engine.load(&path).unwrap();
    engine.add_document(DocId::new(0), "fresh").unwrap();

    assert_eq!(pairs(&engine.search("search")), vec![(2, 1)]);
    assert_eq!(pairs(&engine.search("fresh")), vec![(0, 1)]);
}

// ============================================================================
// On-Disk Layout
// ============================================================================

#[test]
fn file_layout_is_little_endian_and_canonical() {
    let (_dir, path) = scratch();
    let engine = IndexEngine::new();
    engine.add_document(DocId::new(5), "b a b").unwrap();
    engine.add_document(DocId::new(1), "b").unwrap();
    engine.save(&path).unwrap();

    let mut expected = Vec::new();
    expected.extend_from_slice(&le32(INDEX_FORMAT_VERSION));
    expected.extend_from_slice(&le32(2));
    // "a": one posting
    expected.extend_from_slice(&le32(1));
    expected.extend_from_slice(b"a");
    expected.extend_from_slice(&le32(1));
    expected.extend_from_slice(&5u64.to_le_bytes());
    expected.extend_from_slice(&le32(1));
    // "b": postings in doc id order
    expected.extend_from_slice(&le32(1));
    expected.extend_from_slice(b"b");
    expected.extend_from_slice(&le32(2));
    expected.extend_from_slice(&1u64.to_le_bytes());
    expected.extend_from_slice(&le32(1));
    expected.extend_from_slice(&5u64.to_le_bytes());
    expected.extend_from_slice(&le32(2));

    assert_eq!(fs::read(&path).unwrap(), expected);
}

#[test]
fn saving_twice_produces_identical_bytes() {
    let (dir, path) = scratch();
    let engine = engine_with_corpus();
    engine.save(&path).unwrap();
    let first = fs::read(&path).unwrap();

    let other = dir.path().join("other.index");
    engine.save(&other).unwrap();
    assert_eq!(fs::read(&other).unwrap(), first);
}

// ============================================================================
// Atomic Save
// ============================================================================

#[test]
fn save_leaves_no_temporary_files() {
    let (dir, path) = scratch();
    let engine = engine_with_corpus();
    engine.save(&path).unwrap();
    engine.add_document(DocId::new(4), "more").unwrap();
    engine.save(&path).unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("test.index")]);
}

#[test]
fn failed_save_keeps_previous_file() {
    let (dir, path) = scratch();
    engine_with_corpus().save(&path).unwrap();
    let before = fs::read(&path).unwrap();

    let missing_parent = dir.path().join("no_such_dir").join("x.index");
    let err = engine_with_corpus().save(&missing_parent).unwrap_err();

    assert!(err.is_io());
    assert_eq!(fs::read(&path).unwrap(), before);
}

// ============================================================================
// All-or-Nothing Load
// ============================================================================

#[test]
fn missing_file_is_io_error_and_keeps_state() {
    let (dir, _path) = scratch();
    let engine = engine_with_corpus();
    let before = engine.search("search engines");

    let err = engine.load(dir.path().join("absent.index")).unwrap_err();

    assert!(err.is_io());
    assert_eq!(engine.search("search engines"), before);
}

#[test]
fn every_truncation_is_corrupt_and_keeps_state() {
    let (dir, path) = scratch();
    engine_with_corpus().save(&path).unwrap();
    let bytes = fs::read(&path).unwrap();

    let engine = IndexEngine::new();
    engine.add_document(DocId::new(77), "sentinel").unwrap();
    let cut = dir.path().join("cut.index");

    for len in 0..bytes.len() {
        fs::write(&cut, &bytes[..len]).unwrap();
        let err = engine.load(&cut).unwrap_err();
        assert!(err.is_corrupt(), "prefix of {} bytes: {:?}", len, err);
        assert_eq!(pairs(&engine.search("sentinel")), vec![(77, 1)]);
    }
}

#[test]
fn unknown_version_is_corrupt() {
    let (_dir, path) = scratch();
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&le32(INDEX_FORMAT_VERSION + 1));
    bytes.extend_from_slice(&le32(0));
    fs::write(&path, bytes).unwrap();

    let err = IndexEngine::new().load(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CorruptIndex);
}

#[test]
fn trailing_bytes_are_corrupt() {
    let (_dir, path) = scratch();
    engine_with_corpus().save(&path).unwrap();
    let mut bytes = fs::read(&path).unwrap();
    bytes.push(0);
    fs::write(&path, bytes).unwrap();

    assert!(IndexEngine::new().load(&path).unwrap_err().is_corrupt());
}

#[test]
fn invalid_utf8_term_is_corrupt() {
    let (_dir, path) = scratch();
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&le32(INDEX_FORMAT_VERSION));
    bytes.extend_from_slice(&le32(1));
    bytes.extend_from_slice(&le32(2));
    bytes.extend_from_slice(&[0xc3, 0x28]);
    bytes.extend_from_slice(&le32(1));
    bytes.extend_from_slice(&1u64.to_le_bytes());
    bytes.extend_from_slice(&le32(1));
    fs::write(&path, bytes).unwrap();

    assert!(IndexEngine::new().load(&path).unwrap_err().is_corrupt());
}

#[test]
fn huge_declared_counts_fail_cleanly() {
    let (_dir, path) = scratch();
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&le32(INDEX_FORMAT_VERSION));
    bytes.extend_from_slice(&le32(u32::MAX));
    fs::write(&path, bytes).unwrap();

    assert!(IndexEngine::new().load(&path).unwrap_err().is_corrupt());
}
