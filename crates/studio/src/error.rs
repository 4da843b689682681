use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Errors raised by the generation collaborators.
///
/// These never reach the retrieval core; a failed generation leaves the
/// store untouched.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Required API key not present in the environment
    #[error("{0} not set in environment")]
    ApiKeyMissing(&'static str),

    /// Remote API returned a non-success status
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// HTTP transport failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Completion response carried no message content
    #[error("Empty completion response")]
    EmptyResponse,

    /// Speech response carried no audio payload
    #[error("No audio content in response")]
    NoAudioContent,

    /// Audio payload failed base64 decoding
    #[error("Invalid audio payload: {0}")]
    AudioDecode(#[from] base64::DecodeError),

    /// Operation needs document content but none was supplied
    #[error("No document content to analyze")]
    NoContent,
}
