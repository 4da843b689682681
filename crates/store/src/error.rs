use crate::extract::ExtractError;
use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in the document store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Ingested document had no content left after cleaning
    #[error("Document '{name}' is empty or whitespace-only after cleaning")]
    EmptyDocument { name: String },

    /// Invalid store configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Text extraction failed at the collaborator boundary; propagated
    /// unchanged and never retried
    #[error(transparent)]
    Extraction(#[from] ExtractError),
}
