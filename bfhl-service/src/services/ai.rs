use std::sync::Arc;

use super::providers::CompletionProvider;

/// Returned in place of a completion whenever the provider fails. Clients
/// see it as ordinary `data`, never as an HTTP error.
pub const AI_ERROR_SENTINEL: &str = "AI_error";

/// Wraps a provider and absorbs its failures into [`AI_ERROR_SENTINEL`].
#[derive(Clone)]
pub struct AiDelegate {
    provider: Arc<dyn CompletionProvider>,
}

impl AiDelegate {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn ask(&self, prompt: &str) -> String {
        match self.provider.complete(prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    model = %self.provider.model(),
                    error = %e,
                    "Completion failed, answering with sentinel"
                );
                AI_ERROR_SENTINEL.to_string()
            }
        }
    }
}
