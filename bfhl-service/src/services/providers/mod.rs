//! Generative-language provider abstraction.
//!
//! A trait seam over the upstream completion API so the handler can be
//! exercised against a mock without network access.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text completion providers (e.g. Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a completion for `prompt`.
    ///
    /// Returns the first candidate's text, or `None` when the response is
    /// missing any of the expected fields.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ProviderError>;
}
