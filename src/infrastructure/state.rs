//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::TriviaService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::llm_client::LlmClient;
use crate::infrastructure::swapi::SwapiClient;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub trivia_service: TriviaService<LlmClient>,
    pub dataset_client: SwapiClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let llm_client = LlmClient::from_config(&config)?;
        let dataset_client = SwapiClient::new(&config.swapi_base_url, config.swapi_timeout)?;

        Ok(Self::from_parts(config, llm_client, dataset_client))
    }

    pub fn from_parts(config: AppConfig, llm_client: LlmClient, dataset_client: SwapiClient) -> Self {
        Self {
            config,
            trivia_service: TriviaService::new(Arc::new(llm_client)),
            dataset_client,
        }
    }
}
