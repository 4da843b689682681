use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weighting scheme for chunk vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorScheme {
    /// Raw term frequency over the bounded vocabulary, L2-normalized
    Simple,

    /// Term frequency × smoothed inverse document frequency with English
    /// stop-word exclusion. Down-weights ubiquitous terms and ranks
    /// materially better; the default.
    Tfidf,
}

impl fmt::Display for VectorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Tfidf => write!(f, "tfidf"),
        }
    }
}

impl FromStr for VectorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "tfidf" | "tf-idf" => Ok(Self::Tfidf),
            other => Err(format!("unknown vectorization scheme: {other}")),
        }
    }
}

/// Configuration for index construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Weighting scheme
    pub scheme: VectorScheme,

    /// Maximum vocabulary size
    pub max_terms: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            scheme: VectorScheme::Tfidf,
            max_terms: 100,
        }
    }
}

impl IndexConfig {
    /// Raw-frequency scheme with the wider vocabulary it needs to
    /// compensate for keeping stop words
    pub fn simple() -> Self {
        Self {
            scheme: VectorScheme::Simple,
            max_terms: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_parsing() {
        assert_eq!("tfidf".parse::<VectorScheme>(), Ok(VectorScheme::Tfidf));
        assert_eq!("TF-IDF".parse::<VectorScheme>(), Ok(VectorScheme::Tfidf));
        assert_eq!("simple".parse::<VectorScheme>(), Ok(VectorScheme::Simple));
        assert!("fancy".parse::<VectorScheme>().is_err());
    }

    #[test]
    fn test_scheme_display_roundtrip() {
        for scheme in [VectorScheme::Simple, VectorScheme::Tfidf] {
            assert_eq!(scheme.to_string().parse::<VectorScheme>(), Ok(scheme));
        }
    }
}
