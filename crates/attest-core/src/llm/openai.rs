//! OpenAI-compatible chat completion client.
//!
//! Both hosted services the pipeline talks to, the vision-capable
//! GPT-4o endpoint and the Groq-hosted DeepSeek endpoint used for
//! cross-checking, speak the same `/chat/completions` wire format, so a
//! single client parameterized by base URL and model name covers both.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ChatModel, ChatMessage, ChatRequest};
use crate::error::{AnalyzerError, Result};

/// Connection settings for one chat endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Bearer token for the endpoint
    pub api_key: String,

    /// Model identifier, e.g. `gpt-4o` or `deepseek-r1-distill-llama-70b`
    pub model: String,

    /// API base, e.g. `https://api.openai.com/v1`
    pub api_base: String,

    /// Request timeout
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Creates a config with the default 120 second timeout.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            api_base: api_base.into(),
            timeout: Duration::from_secs(120),
        }
    }
}

/// Chat client for OpenAI-compatible endpoints.
pub struct OpenAiChatModel {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiChatModel {
    /// Creates a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Configuration`] when the API key is
    /// empty or the HTTP client cannot be built.
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(AnalyzerError::configuration("missing API key"));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnalyzerError::configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, request: ChatRequest) -> Result<String> {
        let body = CompletionRequest {
            model: self.config.model.clone(),
            temperature: request.temperature,
            messages: request.messages,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<response unavailable>".to_string());
            return Err(AnalyzerError::Api { status, message });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AnalyzerError::Api {
                status: 200,
                message: "response contained no choices".to_string(),
            })
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_duplicate_slash() {
        let model = OpenAiChatModel::new(OpenAiConfig::new(
            "key",
            "gpt-4o",
            "https://api.openai.com/v1/",
        ))
        .unwrap();
        assert_eq!(
            model.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let result = OpenAiChatModel::new(OpenAiConfig::new("", "gpt-4o", "https://example.com"));
        assert!(matches!(
            result,
            Err(AnalyzerError::Configuration { .. })
        ));
    }
}
