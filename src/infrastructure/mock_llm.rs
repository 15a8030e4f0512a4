//! Stand-in language model for running without a model server
//!
//! Reads the record embedded in the prompt and asks about one random
//! informative non-name field, without an answer line. The question names
//! the field, so the response parser can recover the answer from the record.
//! Arrays, URLs and missing-value markers are never asked about.

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::application::ports::outbound::{LlmPort, LlmRequest, LlmResponse};
use crate::application::services::llm::prompt_builder::DATA_MARKER;
use crate::domain::entities::TriviaQuestion;
use crate::domain::services::qualifying_fields;
use crate::domain::value_objects::{DataRecord, DataRecordError};

#[derive(Debug, Clone, Copy, Default)]
pub struct MockLlmClient;

impl MockLlmClient {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MockLlmError {
    #[error("Prompt has no user message")]
    NoPrompt,
    #[error("Prompt does not carry any data")]
    NoData,
    #[error("Prompt data is malformed: {0}")]
    MalformedData(#[from] DataRecordError),
    #[error("Record has nothing to ask about")]
    NothingToAsk,
}

fn compose_question(prompt: &str) -> Result<String, MockLlmError> {
    let (_, data) = prompt.split_once(DATA_MARKER).ok_or(MockLlmError::NoData)?;
    let record = DataRecord::from_json_str(data.trim())?;

    let fields: Vec<&str> = qualifying_fields(&record)
        .into_iter()
        .filter(|field| *field != "name")
        .collect();
    let field = fields
        .choose(&mut rand::thread_rng())
        .ok_or(MockLlmError::NothingToAsk)?;

    let subject = record.name().unwrap_or(TriviaQuestion::UNKNOWN);
    Ok(format!("What is the {} of the {}?", field, subject))
}

#[async_trait]
impl LlmPort for MockLlmClient {
    type Error = MockLlmError;

    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, Self::Error> {
        let prompt = request.last_user_message().ok_or(MockLlmError::NoPrompt)?;
        let content = compose_question(prompt)?;

        Ok(LlmResponse { content })
    }

    async fn health_check(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
