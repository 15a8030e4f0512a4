//! Ollama client for question phrasing
//!
//! Talks to Ollama's OpenAI-compatible `/chat/completions` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{ChatMessage, LlmPort, LlmRequest, LlmResponse};

/// Client for an OpenAI-compatible Ollama API
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, model: &str, timeout: Duration) -> Result<Self, OllamaError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    /// Run a chat completion
    pub async fn chat_completion(&self, request: LlmRequest) -> Result<LlmResponse, OllamaError> {
        let body = ChatCompletionRequest::from_llm_request(&self.model, request);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(OllamaError::ApiError(format!("{}: {}", status, error_text)));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion.into_llm_response()
    }

    /// Check if the server is available
    pub async fn health_check(&self) -> Result<bool, OllamaError> {
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OllamaError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Model returned an empty response")]
    EmptyResponse,
    #[error("Server unavailable")]
    Unavailable,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

impl ChatCompletionRequest {
    fn from_llm_request(model: &str, request: LlmRequest) -> Self {
        Self {
            model: model.to_string(),
            messages: request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        }
    }
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
    content: Option<String>,
}

impl ChatCompletionResponse {
    fn into_llm_response(self) -> Result<LlmResponse, OllamaError> {
        let choice = self.choices.into_iter().next().ok_or(OllamaError::EmptyResponse)?;
        let content = choice.message.content.ok_or(OllamaError::EmptyResponse)?;

        Ok(LlmResponse { content })
    }
}

// =============================================================================
// LlmPort Implementation
// =============================================================================

#[async_trait]
impl LlmPort for OllamaClient {
    type Error = OllamaError;

    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, Self::Error> {
        self.chat_completion(request).await
    }

    async fn health_check(&self) -> Result<(), Self::Error> {
        // Call the inherent method using OllamaClient:: syntax to avoid recursion
        if OllamaClient::health_check(self).await? {
            Ok(())
        } else {
            Err(OllamaError::Unavailable)
        }
    }
}
