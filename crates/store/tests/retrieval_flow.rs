//! End-to-end retrieval flow: ingest, index, query, mutate, re-query.

use groundnote_chunker::ChunkerConfig;
use groundnote_index::{IndexConfig, VectorScheme};
use groundnote_store::{DocumentStore, PlainTextExtractor, StoreConfig, StoreError};
use pretty_assertions::assert_eq;
use std::io::Write;

fn corpus_store() -> DocumentStore {
    let mut store = DocumentStore::new(StoreConfig::default()).unwrap();
    store
        .add_document(
            "animals.txt",
            "The cat sat on the mat. Cats are small domestic mammals that hunt mice.",
            "",
        )
        .unwrap();
    store
        .add_document(
            "physics.txt",
            "Quantum computing uses qubits. A qubit exploits superposition and entanglement.",
            "",
        )
        .unwrap();
    store
        .add_document(
            "cooking.txt",
            "Bread baking requires flour, water, yeast, and patience in the kitchen.",
            "",
        )
        .unwrap();
    store
}

#[test]
fn test_topical_queries_hit_the_right_document() {
    let mut store = corpus_store();

    let hits = store.retrieve("cat mammals", 3);
    assert!(!hits.is_empty());
    assert_eq!(hits[0].doc_name, "animals.txt");

    let hits = store.retrieve("quantum qubit superposition", 3);
    assert!(!hits.is_empty());
    assert_eq!(hits[0].doc_name, "physics.txt");

    let hits = store.retrieve("baking yeast", 3);
    assert!(!hits.is_empty());
    assert_eq!(hits[0].doc_name, "cooking.txt");
}

#[test]
fn test_retrieval_is_deterministic() {
    let mut first = corpus_store();
    let mut second = corpus_store();

    for query in ["cat", "qubit entanglement", "flour water"] {
        assert_eq!(first.retrieve(query, 3), second.retrieve(query, 3));
        // Repeated calls on the same store agree too
        assert_eq!(first.retrieve(query, 3), first.retrieve(query, 3));
    }
}

#[test]
fn test_mutation_is_reflected_in_next_retrieval() {
    let mut store = corpus_store();
    assert!(store.retrieve("volcano eruption", 3).is_empty());

    store
        .add_document(
            "geology.txt",
            "A volcano eruption ejects lava and ash from the mantle.",
            "",
        )
        .unwrap();

    let hits = store.retrieve("volcano eruption", 3);
    assert!(!hits.is_empty());
    assert_eq!(hits[0].doc_name, "geology.txt");
}

#[test]
fn test_irrelevant_query_yields_nothing() {
    let mut store = corpus_store();
    // No corpus chunk shares a term with this query
    assert!(store.retrieve("zzyzx xylophone", 5).is_empty());
}

#[test]
fn test_top_k_clamps_to_available_chunks() {
    let mut store = corpus_store();
    let hits = store.retrieve("the cat", 100);
    assert!(hits.len() <= store.chunk_count());
    assert!(!hits.is_empty());
}

#[test]
fn test_ties_break_toward_lower_chunk_index() {
    let mut store = DocumentStore::new(StoreConfig::default()).unwrap();
    // Identical chunks score identically; order must follow chunk index
    store.add_document("a.txt", "orbit satellite", "").unwrap();
    store.add_document("b.txt", "orbit satellite", "").unwrap();
    store.add_document("c.txt", "orbit satellite", "").unwrap();

    let hits = store.retrieve("orbit", 3);
    let indices: Vec<usize> = hits.iter().map(|h| h.chunk_index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_simple_scheme_retrieves_too() {
    let config = StoreConfig {
        index: IndexConfig {
            scheme: VectorScheme::Simple,
            max_terms: 300,
        },
        ..Default::default()
    };
    let mut store = DocumentStore::new(config).unwrap();
    store
        .add_document("a.txt", "rust ownership borrowing lifetimes", "")
        .unwrap();
    store
        .add_document("b.txt", "python lists dictionaries comprehensions", "")
        .unwrap();

    let hits = store.retrieve("ownership lifetimes", 2);
    assert!(!hits.is_empty());
    assert_eq!(hits[0].doc_name, "a.txt");
}

#[test]
fn test_chunk_indices_span_documents() {
    let config = StoreConfig {
        chunker: ChunkerConfig {
            chunk_size: 40,
            overlap: 10,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut store = DocumentStore::new(config).unwrap();
    store
        .add_document(
            "long.txt",
            "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu",
            "",
        )
        .unwrap();
    store.add_document("short.txt", "omega finale", "").unwrap();

    let hits = store.retrieve("omega finale", 2);
    assert_eq!(hits.len(), 1);
    // The short document's chunk sits after all chunks of the long one
    assert_eq!(hits[0].chunk_index, store.chunk_count() - 1);
    assert_eq!(hits[0].doc_name, "short.txt");
}

#[test]
fn test_ingest_from_file() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(file, "glaciers carve valleys over millennia").unwrap();

    let mut store = DocumentStore::new(StoreConfig::default()).unwrap();
    let report = store
        .add_document_from_file(&PlainTextExtractor, file.path())
        .unwrap();
    assert_eq!(report.chunks_created, 1);

    let hits = store.retrieve("glaciers valleys", 3);
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_whitespace_file_rejected() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(file, "   \n\t\n   ").unwrap();

    let mut store = DocumentStore::new(StoreConfig::default()).unwrap();
    let err = store
        .add_document_from_file(&PlainTextExtractor, file.path())
        .unwrap_err();
    assert!(matches!(err, StoreError::EmptyDocument { .. }));
    assert_eq!(store.stats().total_documents, 0);
}
