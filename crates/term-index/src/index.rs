use crate::config::{IndexConfig, VectorScheme};
use crate::stop_words::is_stop_word;
use crate::tokenize::tokenize;
use ndarray::{Array1, Array2};
use std::collections::{HashMap, HashSet};

/// Term-vector index over a fixed chunk sequence.
///
/// Construction is deterministic: the vocabulary is selected by total corpus
/// frequency (ties broken lexicographically) and laid out in lexicographic
/// column order, so the same chunk sequence and config always produce the
/// same matrix. Rows are unit length, which makes cosine similarity a plain
/// matrix-vector product.
#[derive(Debug, Clone)]
pub struct TermIndex {
    vocabulary: Vec<String>,
    columns: HashMap<String, usize>,
    idf: Option<Array1<f64>>,
    matrix: Array2<f64>,
    scheme: VectorScheme,
}

impl TermIndex {
    /// Build an index over `chunks`.
    ///
    /// Never fails: zero chunks, or a corpus whose every token is a stop
    /// word, produce an empty matrix whose similarities are all zero.
    #[must_use]
    pub fn build<S: AsRef<str>>(chunks: &[S], config: &IndexConfig) -> Self {
        let tokenized: Vec<Vec<String>> = chunks.iter().map(|c| tokenize(c.as_ref())).collect();

        let vocabulary = select_vocabulary(&tokenized, config);
        let columns: HashMap<String, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(col, term)| (term.clone(), col))
            .collect();

        let idf = match config.scheme {
            VectorScheme::Simple => None,
            VectorScheme::Tfidf => Some(compute_idf(&tokenized, &vocabulary, &columns)),
        };

        let mut matrix = Array2::zeros((tokenized.len(), vocabulary.len()));
        for (row, tokens) in tokenized.iter().enumerate() {
            for (term, count) in count_terms(tokens) {
                if let Some(&col) = columns.get(term) {
                    let weight = match &idf {
                        Some(idf) => count * idf[col],
                        None => count,
                    };
                    matrix[[row, col]] = weight;
                }
            }
        }

        for mut row in matrix.rows_mut() {
            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row.mapv_inplace(|v| v / norm);
            }
        }

        log::debug!(
            "Built {} index: {} chunks, {} terms",
            config.scheme,
            tokenized.len(),
            vocabulary.len()
        );

        Self {
            vocabulary,
            columns,
            idf,
            matrix,
            scheme: config.scheme,
        }
    }

    /// Represent a query over the existing vocabulary.
    ///
    /// Out-of-vocabulary query terms contribute zero weight; the query never
    /// extends the vocabulary. The result is unit length when nonzero.
    #[must_use]
    pub fn vectorize_query(&self, query: &str) -> Array1<f64> {
        let tokens = tokenize(query);
        let mut vector = Array1::zeros(self.vocabulary.len());

        for (term, count) in count_terms(&tokens) {
            if let Some(&col) = self.columns.get(term) {
                vector[col] = match &self.idf {
                    Some(idf) => count * idf[col],
                    None => count,
                };
            }
        }

        let norm = vector.dot(&vector).sqrt();
        if norm > 0.0 {
            vector.mapv_inplace(|v| v / norm);
        }
        vector
    }

    /// Cosine similarity between a query vector and every chunk vector
    #[must_use]
    pub fn similarities(&self, query: &Array1<f64>) -> Vec<f64> {
        self.matrix.dot(query).to_vec()
    }

    /// Vectorize `query` and score every chunk against it
    #[must_use]
    pub fn score_query(&self, query: &str) -> Vec<f64> {
        self.similarities(&self.vectorize_query(query))
    }

    /// Number of chunks the index was built from
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.matrix.nrows()
    }

    /// The bounded vocabulary, in column order
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// The scheme the index was built with
    #[must_use]
    pub const fn scheme(&self) -> VectorScheme {
        self.scheme
    }
}

fn count_terms(tokens: &[String]) -> HashMap<&str, f64> {
    let mut counts: HashMap<&str, f64> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_default() += 1.0;
    }
    counts
}

fn select_vocabulary(tokenized: &[Vec<String>], config: &IndexConfig) -> Vec<String> {
    let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
    for tokens in tokenized {
        for token in tokens {
            if config.scheme == VectorScheme::Tfidf && is_stop_word(token) {
                continue;
            }
            *corpus_freq.entry(token.as_str()).or_default() += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = corpus_freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(config.max_terms);

    let mut vocabulary: Vec<String> = ranked.into_iter().map(|(t, _)| t.to_string()).collect();
    vocabulary.sort();
    vocabulary
}

/// Smoothed inverse document frequency: ln((1 + n) / (1 + df)) + 1
fn compute_idf(
    tokenized: &[Vec<String>],
    vocabulary: &[String],
    columns: &HashMap<String, usize>,
) -> Array1<f64> {
    let n = tokenized.len() as f64;
    let mut df = vec![0usize; vocabulary.len()];

    for tokens in tokenized {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in distinct {
            if let Some(&col) = columns.get(term) {
                df[col] += 1;
            }
        }
    }

    df.into_iter()
        .map(|d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
        .collect()
}
