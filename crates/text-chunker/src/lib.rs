//! # Groundnote Chunker
//!
//! Text normalization and overlapping-window segmentation for retrieval.
//!
//! ## Pipeline
//!
//! ```text
//! Raw extracted text
//!     │
//!     ├──> Cleaner (allow-list strip, whitespace collapse, trim)
//!     │
//!     └──> Chunker
//!          ├─> character windows of `chunk_size` with `overlap` carry-back
//!          └─> sentence windows (alternative strategy)
//! ```
//!
//! Chunks within one document cover the cleaned text contiguously: the first
//! chunk plus every later chunk with its leading overlap removed concatenate
//! back to the cleaned input.
//!
//! ## Example
//!
//! ```rust
//! use groundnote_chunker::{Chunker, ChunkerConfig};
//!
//! let chunker = Chunker::new(ChunkerConfig {
//!     chunk_size: 40,
//!     overlap: 10,
//!     ..Default::default()
//! }).unwrap();
//!
//! let chunks = chunker.chunk("A short note.\n\nIt has   messy whitespace.");
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].content, "A short note. It has messy whitespace.");
//! ```

mod chunker;
mod cleaner;
mod config;
mod error;
mod types;

pub use chunker::Chunker;
pub use cleaner::{clean, split_sentences};
pub use config::ChunkerConfig;
pub use error::{ChunkerError, Result};
pub use types::TextChunk;
