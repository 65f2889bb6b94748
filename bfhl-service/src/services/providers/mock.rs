//! Mock provider implementation for testing.

use super::{CompletionProvider, ProviderError};
use async_trait::async_trait;

/// Mock completion provider for testing.
pub struct MockCompletionProvider {
    enabled: bool,
}

impl MockCompletionProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock completion provider not enabled".to_string(),
            ));
        }

        Ok(format!("Mock response for: {}", prompt))
    }

    fn model(&self) -> &str {
        "mock"
    }
}
