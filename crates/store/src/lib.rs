//! # Groundnote Store
//!
//! In-memory document store and retriever.
//!
//! The store owns every document, the flattened cross-document chunk
//! sequence, and the derived term-vector index. All state lives for the
//! session only; nothing is persisted.
//!
//! ## Data flow
//!
//! ```text
//! raw text ──> clean ──> chunk ──> Document + flattened chunk sequence
//!                                        │
//!                             index invalidated (lazy rebuild)
//!                                        │
//! query ──> vectorize over index vocabulary ──> cosine ranking ──> top-k
//! ```
//!
//! Mutations (`add_document`, `clear`) invalidate the index and the
//! per-query result cache; the next retrieval rebuilds from current content,
//! so results are never stale.

mod document;
mod error;
mod extract;
mod index_cache;
mod shared;
mod store;

pub use document::{Document, DocumentStats, IngestReport, RetrievedChunk, StoreStats};
pub use error::{Result, StoreError};
pub use extract::{ExtractError, Extracted, PlainTextExtractor, TextExtractor};
pub use index_cache::IndexCache;
pub use shared::SharedStore;
pub use store::{DocumentStore, StoreConfig};
