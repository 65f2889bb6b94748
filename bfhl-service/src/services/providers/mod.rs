//! Chat-completion provider abstraction.
//!
//! The service only ever needs "prompt in, text out", so a single trait
//! covers the hosted Groq backend and the mock used by tests.

pub mod groq;
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

    #[error("Rate limited")]
    RateLimited,

    #[error("Empty completion")]
    EmptyResponse,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Single-turn, non-streaming chat completion.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send `prompt` as the only user message and return the first choice.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}
