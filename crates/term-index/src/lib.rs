//! # Groundnote Index
//!
//! Sparse term-vector index over document chunks.
//!
//! Builds a bounded vocabulary from a chunk sequence, represents every chunk
//! as a unit-length weight vector over that vocabulary, and ranks chunks
//! against a query by cosine similarity. Two weighting schemes are
//! supported behind one switch: raw term frequency and TF-IDF with English
//! stop-word exclusion.
//!
//! The index is a pure derived value: it is valid only for the exact chunk
//! sequence it was built from, and the owning store decides when to rebuild.

mod config;
mod index;
mod stop_words;
mod tokenize;

pub use config::{IndexConfig, VectorScheme};
pub use index::TermIndex;
pub use stop_words::is_stop_word;
pub use tokenize::tokenize;
