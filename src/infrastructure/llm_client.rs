//! Runtime selection of the language model backend

use async_trait::async_trait;

use crate::application::ports::outbound::{LlmPort, LlmRequest, LlmResponse};
use crate::infrastructure::config::{AppConfig, LlmProvider};
use crate::infrastructure::mock_llm::{MockLlmClient, MockLlmError};
use crate::infrastructure::ollama::{OllamaClient, OllamaError};

/// The configured model backend
pub enum LlmClient {
    Ollama(OllamaClient),
    Mock(MockLlmClient),
    /// No backend; every call fails so questions come from the templates
    Disabled,
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error(transparent)]
    Ollama(#[from] OllamaError),
    #[error(transparent)]
    Mock(#[from] MockLlmError),
    #[error("No language model configured")]
    Disabled,
}

impl LlmClient {
    pub fn from_config(config: &AppConfig) -> Result<Self, LlmClientError> {
        Ok(match config.llm_provider {
            LlmProvider::Ollama => Self::Ollama(OllamaClient::with_timeout(
                &config.ollama_base_url,
                &config.ollama_model,
                config.llm_timeout,
            )?),
            LlmProvider::Mock => Self::Mock(MockLlmClient::new()),
            LlmProvider::None => Self::Disabled,
        })
    }

    pub fn provider(&self) -> LlmProvider {
        match self {
            Self::Ollama(_) => LlmProvider::Ollama,
            Self::Mock(_) => LlmProvider::Mock,
            Self::Disabled => LlmProvider::None,
        }
    }
}

#[async_trait]
impl LlmPort for LlmClient {
    type Error = LlmClientError;

    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, Self::Error> {
        match self {
            Self::Ollama(client) => Ok(client.chat_completion(request).await?),
            Self::Mock(client) => Ok(client.generate(request).await?),
            Self::Disabled => Err(LlmClientError::Disabled),
        }
    }

    async fn health_check(&self) -> Result<(), Self::Error> {
        match self {
            Self::Ollama(client) => Ok(LlmPort::health_check(client).await?),
            Self::Mock(client) => Ok(LlmPort::health_check(client).await?),
            Self::Disabled => Err(LlmClientError::Disabled),
        }
    }
}
