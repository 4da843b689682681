use crate::cleaner::{clean, split_sentences};
use crate::config::ChunkerConfig;
use crate::error::{ChunkerError, Result};
use crate::types::TextChunk;

/// Main chunker interface for segmenting document text
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker with configuration
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate().map_err(ChunkerError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Split raw text into overlapping character windows.
    ///
    /// The text is cleaned first. Cleaned text of at most `chunk_size`
    /// characters yields a single chunk at offset 0 (empty cleaned text
    /// yields no chunks); longer text yields windows starting every
    /// `chunk_size - overlap` characters, the last one clipped to the text
    /// end. Window bounds are measured in characters, so multi-byte input
    /// is never split inside a codepoint.
    #[must_use]
    pub fn chunk(&self, text: &str) -> Vec<TextChunk> {
        let cleaned = clean(text);
        if cleaned.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = cleaned.chars().collect();
        let size = self.config.chunk_size;
        if chars.len() <= size {
            return vec![TextChunk::new(cleaned, 0)];
        }

        // validate() guarantees overlap < size, so step is always positive
        let step = size - self.config.overlap;
        let mut chunks = Vec::with_capacity(chars.len() / step + 1);
        let mut start = 0;

        loop {
            let end = (start + size).min(chars.len());
            let content: String = chars[start..end].iter().collect();
            chunks.push(TextChunk::new(content, start));
            if end == chars.len() {
                break;
            }
            start += step;
        }

        chunks
    }

    /// Split raw text into overlapping sentence windows.
    ///
    /// Same sliding-window logic as [`Chunker::chunk`], over sentences
    /// instead of characters; each chunk joins its sentences with single
    /// spaces.
    #[must_use]
    pub fn chunk_sentences(&self, text: &str) -> Vec<String> {
        let sentences = split_sentences(&clean(text));
        if sentences.is_empty() {
            return Vec::new();
        }

        let size = self.config.sentences_per_chunk;
        if sentences.len() <= size {
            return vec![sentences.join(" ")];
        }

        let step = size - self.config.overlap_sentences;
        let mut chunks = Vec::new();
        let mut start = 0;

        loop {
            let end = (start + size).min(sentences.len());
            chunks.push(sentences[start..end].join(" "));
            if end == sentences.len() {
                break;
            }
            start += step;
        }

        chunks
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            config: ChunkerConfig::default(),
        }
    }
}

/// Reassemble chunks produced by [`Chunker::chunk`], removing the overlap
/// carried back into each window. Inverse of chunking over cleaned text.
#[must_use]
pub fn reassemble(chunks: &[TextChunk], overlap: usize) -> String {
    let mut out = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        if i == 0 {
            out.push_str(&chunk.content);
        } else {
            out.extend(chunk.content.chars().skip(overlap));
        }
    }
    out
}
