use crate::document::{IngestReport, RetrievedChunk, StoreStats};
use crate::error::Result;
use crate::extract::TextExtractor;
use crate::store::{DocumentStore, StoreConfig};
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle to a store shared across threads.
///
/// Mutations take the write lock. Retrieval first tries the read path,
/// which answers only from a valid index, and upgrades to the write lock
/// when a rebuild is pending. A poisoned lock is recovered rather than
/// propagated; the store's own invariants hold after any panic because
/// every mutation invalidates derived state before exposing it.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<DocumentStore>>,
}

impl SharedStore {
    pub fn new(config: StoreConfig) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(RwLock::new(DocumentStore::new(config)?)),
        })
    }

    /// See [`DocumentStore::add_document`]
    pub fn add_document(&self, name: &str, raw_text: &str, metadata: &str) -> Result<IngestReport> {
        self.write().add_document(name, raw_text, metadata)
    }

    /// See [`DocumentStore::add_document_from_file`]
    pub fn add_document_from_file(
        &self,
        extractor: &dyn TextExtractor,
        path: &Path,
    ) -> Result<IngestReport> {
        self.write().add_document_from_file(extractor, path)
    }

    /// See [`DocumentStore::clear`]
    pub fn clear(&self) {
        self.write().clear();
    }

    /// See [`DocumentStore::stats`]
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        self.read().stats()
    }

    /// See [`DocumentStore::leading_chunks`]
    #[must_use]
    pub fn leading_chunks(&self, n: usize) -> Vec<String> {
        self.read().leading_chunks(n)
    }

    /// Rank chunks against `query`, rebuilding the index only when needed.
    ///
    /// Concurrent readers proceed in parallel while the index is valid;
    /// only the rebuild after a mutation serializes behind the write lock.
    #[must_use]
    pub fn retrieve(&self, query: &str, top_k: usize) -> Vec<RetrievedChunk> {
        if let Some(hits) = self.read().retrieve_if_ready(query, top_k) {
            return hits;
        }
        self.write().retrieve(query, top_k)
    }

    fn read(&self) -> RwLockReadGuard<'_, DocumentStore> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, DocumentStore> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}
