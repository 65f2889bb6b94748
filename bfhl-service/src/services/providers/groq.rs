//! Groq chat-completion provider.
//!
//! Talks to the OpenAI-compatible `/chat/completions` endpoint with a single
//! user message and no streaming.

use super::{CompletionProvider, ProviderError};
use crate::config::GroqSettings;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Groq provider.
pub struct GroqProvider {
    settings: GroqSettings,
    client: Client,
}

impl GroqProvider {
    pub fn new(settings: GroqSettings) -> Result<Self, ProviderError> {
        // No request timeout: a slow completion is left to the upstream.
        let client = Client::builder()
            .build()
            .map_err(|e| ProviderError::NotConfigured(format!("HTTP client: {}", e)))?;

        Ok(Self { settings, client })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.api_base.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self.settings.api_key.expose_secret();
        if api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Groq API key not configured".to_string(),
            ));
        }

        let request = ChatCompletionRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(
            model = %self.settings.model,
            prompt_len = prompt.len(),
            "Sending request to Groq API"
        );

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "Groq API error {}: {}",
                status, error_text
            )));
        }

        let api_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .ok_or(ProviderError::EmptyResponse)
    }

    fn model(&self) -> &str {
        &self.settings.model
    }
}

// ============================================================================
// Groq API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_has_single_user_message() {
        let request = ChatCompletionRequest {
            model: "llama-3.3-70b-versatile",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "llama-3.3-70b-versatile",
                "messages": [{"role": "user", "content": "hello"}]
            })
        );
    }

    #[test]
    fn api_url_tolerates_trailing_slash() {
        let mut settings = GroqSettings::new("key");
        settings.api_base = "http://localhost:9999/openai/v1/".to_string();
        let provider = GroqProvider::new(settings).unwrap();

        assert_eq!(
            provider.api_url(),
            "http://localhost:9999/openai/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn missing_key_fails_before_network() {
        let provider = GroqProvider::new(GroqSettings::new("")).unwrap();
        let err = provider.complete("hi").await.unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
    }
}
