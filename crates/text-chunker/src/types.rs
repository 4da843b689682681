use serde::{Deserialize, Serialize};

/// A contiguous window of a document's cleaned text.
///
/// `start` is the offset of the window within the cleaned text, counted in
/// characters (never bytes), so consecutive chunks of the same document
/// satisfy `next.start == prev.start + step` where `step` is
/// `chunk_size - overlap`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    /// The chunk text
    pub content: String,

    /// Character offset of the window start within the cleaned text
    pub start: usize,
}

impl TextChunk {
    pub fn new(content: impl Into<String>, start: usize) -> Self {
        Self {
            content: content.into(),
            start,
        }
    }

    /// Length of the chunk in characters
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
