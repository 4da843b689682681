use crate::document::{Document, DocumentStats, IngestReport, RetrievedChunk, StoreStats};
use crate::error::{Result, StoreError};
use crate::extract::TextExtractor;
use crate::index_cache::IndexCache;
use groundnote_chunker::{clean, Chunker, ChunkerConfig};
use groundnote_index::IndexConfig;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::Path;

/// Configuration for the document store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Chunking parameters
    pub chunker: ChunkerConfig,

    /// Index construction parameters
    pub index: IndexConfig,

    /// Chunks scoring at or below this cosine similarity are never surfaced
    pub relevance_threshold: f64,

    /// Capacity of the per-query result cache
    pub result_cache_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            chunker: ChunkerConfig::default(),
            index: IndexConfig::default(),
            relevance_threshold: 0.01,
            result_cache_size: 64,
        }
    }
}

/// One entry of the flattened cross-document chunk sequence
#[derive(Debug, Clone)]
struct FlatChunk {
    text: String,
    doc_name: String,
}

/// In-memory document store with lazy index rebuild.
///
/// Owns the documents, the flattened chunk sequence, the derived
/// [`IndexCache`], and an LRU cache of recent retrievals. Every mutation
/// invalidates both caches, so a retrieval always reflects current content.
pub struct DocumentStore {
    config: StoreConfig,
    chunker: Chunker,
    documents: Vec<Document>,
    flat: Vec<FlatChunk>,
    index: IndexCache,
    results: LruCache<(String, usize), Vec<RetrievedChunk>>,
}

impl DocumentStore {
    /// Create an empty store with the given configuration
    pub fn new(config: StoreConfig) -> Result<Self> {
        let chunker = Chunker::new(config.chunker.clone())
            .map_err(|e| StoreError::InvalidConfig(e.to_string()))?;

        if !config.relevance_threshold.is_finite() || config.relevance_threshold < 0.0 {
            return Err(StoreError::InvalidConfig(format!(
                "relevance_threshold must be finite and >= 0, got {}",
                config.relevance_threshold
            )));
        }

        let cache_size = NonZeroUsize::new(config.result_cache_size)
            .ok_or_else(|| StoreError::InvalidConfig("result_cache_size must be > 0".into()))?;

        Ok(Self {
            config,
            chunker,
            documents: Vec::new(),
            flat: Vec::new(),
            index: IndexCache::new(),
            results: LruCache::new(cache_size),
        })
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Add a document from raw text.
    ///
    /// Cleans, chunks, and appends the document, replacing any existing
    /// document of the same name (last write wins). Invalidates the index
    /// and the result cache. Text that cleans down to nothing fails with
    /// [`StoreError::EmptyDocument`] and stores nothing.
    pub fn add_document(
        &mut self,
        name: &str,
        raw_text: &str,
        metadata: &str,
    ) -> Result<IngestReport> {
        let cleaned = clean(raw_text);
        if cleaned.is_empty() {
            return Err(StoreError::EmptyDocument {
                name: name.to_string(),
            });
        }

        let chunks: Vec<String> = self
            .chunker
            .chunk(&cleaned)
            .into_iter()
            .map(|c| c.content)
            .collect();
        let chunks_created = chunks.len();
        let char_count = cleaned.chars().count();

        if let Some(pos) = self.documents.iter().position(|d| d.name == name) {
            log::warn!("Replacing existing document '{name}'");
            self.documents.remove(pos);
        }

        self.documents.push(Document {
            name: name.to_string(),
            text: cleaned,
            chunks,
            metadata: metadata.to_string(),
            char_count,
        });
        self.rebuild_flat();
        self.invalidate();

        log::info!("Added document '{name}': {chunks_created} chunks, {char_count} characters");

        Ok(IngestReport {
            doc_name: name.to_string(),
            chunks_created,
            char_count,
            metadata: metadata.to_string(),
        })
    }

    /// Add a document by running a [`TextExtractor`] over a file.
    /// Extraction failures propagate unchanged.
    pub fn add_document_from_file(
        &mut self,
        extractor: &dyn TextExtractor,
        path: &Path,
    ) -> Result<IngestReport> {
        let extracted = extractor.extract(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document");
        self.add_document(name, &extracted.text, &extracted.metadata)
    }

    /// Remove all documents, chunks, and derived state atomically
    pub fn clear(&mut self) {
        self.documents.clear();
        self.flat.clear();
        self.invalidate();
        log::info!("Cleared document store");
    }

    /// Aggregate and per-document statistics. Pure read.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total_documents: self.documents.len(),
            total_chunks: self.flat.len(),
            total_characters: self.documents.iter().map(|d| d.char_count).sum(),
            documents: self
                .documents
                .iter()
                .map(|d| DocumentStats {
                    name: d.name.clone(),
                    chunks: d.chunk_count(),
                    characters: d.char_count,
                })
                .collect(),
        }
    }

    /// Number of chunks across all documents
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.flat.len()
    }

    /// Whether the store holds no documents
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Texts of the first `n` chunks in flattened order, for generation
    /// context assembly
    #[must_use]
    pub fn leading_chunks(&self, n: usize) -> Vec<String> {
        self.flat.iter().take(n).map(|c| c.text.clone()).collect()
    }

    /// Rank chunks against `query` and return at most `top_k` hits.
    ///
    /// Rebuilds the index if a mutation invalidated it. An empty store
    /// yields an empty result, never an error. Ordering is cosine score
    /// descending with ties broken by lower chunk index, and chunks at or
    /// below the relevance threshold are dropped even when `top_k` slots
    /// remain unused.
    pub fn retrieve(&mut self, query: &str, top_k: usize) -> Vec<RetrievedChunk> {
        if self.flat.is_empty() {
            log::debug!("Retrieve on empty store: '{query}'");
            return Vec::new();
        }

        let key = (query.to_string(), top_k);
        if let Some(hit) = self.results.get(&key) {
            log::debug!("Result cache hit for '{query}' (top_k {top_k})");
            return hit.clone();
        }

        let texts: Vec<&str> = self.flat.iter().map(|c| c.text.as_str()).collect();
        let index = self.index.ensure(&texts, &self.config.index);
        let scores = index.score_query(query);
        let results = rank(&scores, &self.flat, self.config.relevance_threshold, top_k);

        log::debug!("Retrieved {} chunks for '{query}'", results.len());
        self.results.put(key, results.clone());
        results
    }

    /// Read-only retrieval that answers only when the index is already
    /// valid. Returns `None` if a rebuild is pending; callers holding
    /// shared access fall back to an exclusive [`DocumentStore::retrieve`].
    #[must_use]
    pub fn retrieve_if_ready(&self, query: &str, top_k: usize) -> Option<Vec<RetrievedChunk>> {
        if self.flat.is_empty() {
            return Some(Vec::new());
        }

        if let Some(hit) = self.results.peek(&(query.to_string(), top_k)) {
            return Some(hit.clone());
        }

        let index = self.index.get()?;
        let scores = index.score_query(query);
        Some(rank(&scores, &self.flat, self.config.relevance_threshold, top_k))
    }

    fn rebuild_flat(&mut self) {
        self.flat.clear();
        for doc in &self.documents {
            for chunk in &doc.chunks {
                self.flat.push(FlatChunk {
                    text: chunk.clone(),
                    doc_name: doc.name.clone(),
                });
            }
        }
    }

    fn invalidate(&mut self) {
        self.index.invalidate();
        self.results.clear();
    }
}

fn rank(
    scores: &[f64],
    flat: &[FlatChunk],
    threshold: f64,
    top_k: usize,
) -> Vec<RetrievedChunk> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    order
        .into_iter()
        .filter(|&i| scores[i] > threshold)
        .take(top_k)
        .map(|i| RetrievedChunk {
            chunk_index: i,
            text: flat[i].text.clone(),
            doc_name: flat[i].doc_name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> DocumentStore {
        DocumentStore::new(StoreConfig::default()).unwrap()
    }

    #[test]
    fn test_add_and_stats() {
        let mut store = store();
        let report = store.add_document("notes.txt", "the cat sat on the mat", "").unwrap();
        assert_eq!(report.chunks_created, 1);
        assert_eq!(report.char_count, 22);

        let stats = store.stats();
        assert_eq!(stats.total_documents, 1);
        assert_eq!(stats.total_chunks, 1);
        assert_eq!(stats.documents[0].name, "notes.txt");
    }

    #[test]
    fn test_empty_document_rejected_and_store_unchanged() {
        let mut store = store();
        let err = store.add_document("blank.txt", "   \n\t  ", "").unwrap_err();
        assert!(matches!(err, StoreError::EmptyDocument { name } if name == "blank.txt"));

        let stats = store.stats();
        assert_eq!(stats.total_documents, 0);
        assert_eq!(stats.total_chunks, 0);
    }

    #[test]
    fn test_readd_overwrites() {
        let mut store = store();
        store.add_document("a.txt", "first version text", "").unwrap();
        store.add_document("b.txt", "another document entirely", "").unwrap();
        store.add_document("a.txt", "second version text", "").unwrap();

        let stats = store.stats();
        assert_eq!(stats.total_documents, 2);
        // Overwrite moves the document to the end of ingestion order
        assert_eq!(stats.documents[0].name, "b.txt");
        assert_eq!(stats.documents[1].name, "a.txt");

        let hits = store.retrieve("version", 10);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].text.contains("second"));
    }

    #[test]
    fn test_retrieve_empty_store() {
        let mut store = store();
        assert!(store.retrieve("anything", 5).is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut store = store();
        store.add_document("a.txt", "some searchable content here", "").unwrap();
        store.retrieve("searchable", 3);
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.chunk_count(), 0);
        assert!(store.retrieve("searchable", 3).is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = StoreConfig {
            chunker: ChunkerConfig {
                chunk_size: 10,
                overlap: 10,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(DocumentStore::new(config).is_err());

        let config = StoreConfig {
            relevance_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(DocumentStore::new(config).is_err());
    }

    #[test]
    fn test_retrieve_if_ready_requires_valid_index() {
        let mut store = store();
        store.add_document("a.txt", "the cat sat", "").unwrap();

        // Index not built yet
        assert!(store.retrieve_if_ready("cat", 3).is_none());

        store.retrieve("cat", 3);
        let ready = store.retrieve_if_ready("cat", 3).unwrap();
        assert_eq!(ready.len(), 1);

        store.add_document("b.txt", "the dog ran", "").unwrap();
        assert!(store.retrieve_if_ready("cat", 3).is_none());
    }

    #[test]
    fn test_leading_chunks_follow_ingestion_order() {
        let mut store = store();
        store.add_document("a.txt", "alpha content", "").unwrap();
        store.add_document("b.txt", "beta content", "").unwrap();

        let leading = store.leading_chunks(5);
        assert_eq!(leading, vec!["alpha content", "beta content"]);
    }
}
