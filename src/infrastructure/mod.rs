//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - HTTP: Game page and question API routes
//! - Ollama: LLM integration for question phrasing
//! - Mock LLM: Stand-in model for running without a model server
//! - SWAPI: Star Wars dataset client
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod llm_client;
pub mod mock_llm;
pub mod ollama;
pub mod state;
pub mod swapi;
