//! Application configuration

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Which language model backend phrases the questions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// OpenAI-compatible Ollama endpoint
    Ollama,
    /// In-process stand-in that needs no model server
    Mock,
    /// No model; every question comes from the templates
    None,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
            Self::Mock => "mock",
            Self::None => "none",
        }
    }
}

impl FromStr for LlmProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "mock" => Ok(Self::Mock),
            "none" | "disabled" | "off" => Ok(Self::None),
            other => anyhow::bail!("Unknown LLM provider '{}' (expected ollama, mock or none)", other),
        }
    }
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server port
    pub server_port: u16,

    /// Language model backend
    pub llm_provider: LlmProvider,
    /// Ollama API base URL (OpenAI-compatible)
    pub ollama_base_url: String,
    /// Model used for question phrasing
    pub ollama_model: String,
    /// Upper bound on a single model call
    pub llm_timeout: Duration,

    /// SWAPI base URL
    pub swapi_base_url: String,
    /// Largest record id drawn for random questions
    pub swapi_max_record_id: u32,
    /// Upper bound on a single dataset fetch
    pub swapi_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            llm_provider: env::var("LLM_PROVIDER")
                .unwrap_or_else(|_| "mock".to_string())
                .parse()
                .context("LLM_PROVIDER is invalid")?,
            ollama_base_url: env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434/v1".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama2:7b-chat".to_string()),
            llm_timeout: Duration::from_secs(
                env::var("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "15".to_string())
                    .parse()
                    .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            ),

            swapi_base_url: env::var("SWAPI_BASE_URL")
                .unwrap_or_else(|_| "https://swapi.dev/api".to_string()),
            swapi_max_record_id: env::var("SWAPI_MAX_RECORD_ID")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("SWAPI_MAX_RECORD_ID must be a positive number")?,
            swapi_timeout: Duration::from_secs(
                env::var("SWAPI_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .context("SWAPI_TIMEOUT_SECS must be a number of seconds")?,
            ),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            llm_provider: LlmProvider::Mock,
            ollama_base_url: "http://localhost:11434/v1".to_string(),
            ollama_model: "llama2:7b-chat".to_string(),
            llm_timeout: Duration::from_secs(15),
            swapi_base_url: "https://swapi.dev/api".to_string(),
            swapi_max_record_id: 10,
            swapi_timeout: Duration::from_secs(10),
        }
    }
}
