//! Content-generation capability
//!
//! The outline service only needs "prompt in, text out"; everything about
//! transport, models, and authentication stays behind this trait.

use async_trait::async_trait;

/// Errors from the content-generation collaborator
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("generation endpoint returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        message: String,
    },
}

/// Capability to produce text from a prompt
///
/// Implementations must be cheap to share across request handlers.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate text for the given prompt
    ///
    /// # Errors
    /// - `GenerateError::Http` on transport failure
    /// - `GenerateError::Api` when the endpoint rejects the request
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}
