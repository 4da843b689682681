use serde::Serialize;

/// A stored document and its chunk sequence
#[derive(Debug, Clone)]
pub struct Document {
    /// Unique document name; re-adding a name overwrites
    pub name: String,

    /// Full cleaned text
    pub text: String,

    /// Ordered chunk texts covering `text`
    pub chunks: Vec<String>,

    /// Free-form extraction metadata, e.g. "Pages: 12"
    pub metadata: String,

    /// Character count of the cleaned text
    pub char_count: usize,
}

impl Document {
    /// Number of chunks the document was split into
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

/// Result of a successful ingestion
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub doc_name: String,
    pub chunks_created: usize,
    pub char_count: usize,
    pub metadata: String,
}

/// One ranked retrieval hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetrievedChunk {
    /// Position in the flattened cross-document chunk sequence
    pub chunk_index: usize,

    /// The chunk text
    pub text: String,

    /// Owning document name
    pub doc_name: String,
}

/// Aggregate store statistics
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub total_documents: usize,
    pub total_chunks: usize,
    pub total_characters: usize,
    pub documents: Vec<DocumentStats>,
}

/// Per-document breakdown
#[derive(Debug, Clone, Serialize)]
pub struct DocumentStats {
    pub name: String,
    pub chunks: usize,
    pub characters: usize,
}
