use serde::{Deserialize, Serialize};

/// Configuration for text chunking behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Window width in characters for character-based chunking
    pub chunk_size: usize,

    /// Characters carried back from the previous window
    pub overlap: usize,

    /// Window width in sentences for sentence-based chunking
    pub sentences_per_chunk: usize,

    /// Sentences carried back from the previous window
    pub overlap_sentences: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap: 200,
            sentences_per_chunk: 5,
            overlap_sentences: 1,
        }
    }
}

impl ChunkerConfig {
    /// Create config with wider windows, fewer chunks per document
    pub fn wide() -> Self {
        Self {
            chunk_size: 1200,
            ..Default::default()
        }
    }

    /// Validate configuration.
    ///
    /// An overlap reaching the window width would make the window advance by
    /// zero (or backwards) each step; both variants are rejected here so the
    /// chunking loops never have to guard against stalling.
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be > 0".to_string());
        }

        if self.overlap >= self.chunk_size {
            return Err(format!(
                "overlap ({}) must be smaller than chunk_size ({})",
                self.overlap, self.chunk_size
            ));
        }

        if self.sentences_per_chunk == 0 {
            return Err("sentences_per_chunk must be > 0".to_string());
        }

        if self.overlap_sentences >= self.sentences_per_chunk {
            return Err(format!(
                "overlap_sentences ({}) must be smaller than sentences_per_chunk ({})",
                self.overlap_sentences, self.sentences_per_chunk
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(ChunkerConfig::default().validate().is_ok());
        assert!(ChunkerConfig::wide().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ChunkerConfig::default();

        config.chunk_size = 0;
        assert!(config.validate().is_err());

        // Overlap equal to the window width makes no forward progress
        config.chunk_size = 100;
        config.overlap = 100;
        assert!(config.validate().is_err());

        config.overlap = 150;
        assert!(config.validate().is_err());

        config.overlap = 99;
        assert!(config.validate().is_ok());

        config.sentences_per_chunk = 2;
        config.overlap_sentences = 2;
        assert!(config.validate().is_err());

        config.overlap_sentences = 1;
        assert!(config.validate().is_ok());
    }
}
