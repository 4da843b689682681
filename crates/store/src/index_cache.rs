use groundnote_index::{IndexConfig, TermIndex};

/// Derived-state holder for the term-vector index.
///
/// The index is valid only for the exact chunk sequence it was built from.
/// Every store mutation calls [`IndexCache::invalidate`]; the next retrieval
/// rebuilds through [`IndexCache::ensure`]. `None` is the dirty state, so
/// staleness is impossible to observe: there is no path that reads an index
/// without either finding it valid or rebuilding it.
#[derive(Debug, Default)]
pub struct IndexCache {
    index: Option<TermIndex>,
}

impl IndexCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the cached index; the next [`IndexCache::ensure`] rebuilds
    pub fn invalidate(&mut self) {
        if self.index.take().is_some() {
            log::debug!("Term index invalidated");
        }
    }

    /// Whether a rebuild is pending
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.index.is_none()
    }

    /// Get the index, rebuilding from `chunks` if invalidated.
    /// Idempotent while the chunk sequence is unchanged.
    pub fn ensure<S: AsRef<str>>(&mut self, chunks: &[S], config: &IndexConfig) -> &TermIndex {
        self.index.get_or_insert_with(|| {
            log::info!("Rebuilding term index over {} chunks", chunks.len());
            TermIndex::build(chunks, config)
        })
    }

    /// Read-only access; `None` while stale
    #[must_use]
    pub fn get(&self) -> Option<&TermIndex> {
        self.index.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_stale() {
        assert!(IndexCache::new().is_stale());
    }

    #[test]
    fn test_ensure_builds_once() {
        let mut cache = IndexCache::new();
        let chunks = ["alpha beta", "gamma delta"];
        let config = IndexConfig::default();

        cache.ensure(&chunks, &config);
        assert!(!cache.is_stale());

        // Second call reuses the built index
        let vocab_before = cache.get().unwrap().vocabulary().to_vec();
        cache.ensure(&chunks, &config);
        assert_eq!(cache.get().unwrap().vocabulary(), vocab_before);
    }

    #[test]
    fn test_invalidate_marks_stale() {
        let mut cache = IndexCache::new();
        cache.ensure(&["alpha"], &IndexConfig::default());
        cache.invalidate();
        assert!(cache.is_stale());
        assert!(cache.get().is_none());
    }
}
