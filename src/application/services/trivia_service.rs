//! Trivia Service - turns a data record into a question
//!
//! The language model gets the first shot at phrasing the question. Any
//! model failure (missing backend, transport error, timeout, unusable text)
//! is absorbed here and the template generator answers instead, so callers
//! always receive a question.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::application::ports::outbound::{ChatMessage, DatasetPort, LlmPort, LlmRequest};
use crate::application::services::llm::prompt_builder::{QUESTION_MAX_TOKENS, QUESTION_TEMPERATURE};
use crate::application::services::llm::{build_question_prompt, parse_model_output, ResponseParseError};
use crate::domain::entities::{QuestionSource, TriviaQuestion};
use crate::domain::services::generate_fallback_question;
use crate::domain::value_objects::{Category, DataRecord};

/// Errors that can occur in the trivia service
#[derive(Debug, thiserror::Error)]
pub enum TriviaServiceError {
    /// Error from the underlying LLM client
    #[error("LLM error: {0}")]
    LlmError(String),
    /// Model output could not be turned into a question
    #[error("Parse error: {0}")]
    ParseError(#[from] ResponseParseError),
    /// The dataset could not supply a record
    #[error("Dataset error: {0}")]
    DatasetError(String),
}

/// A question together with the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuestion {
    pub question: TriviaQuestion,
    pub source: QuestionSource,
}

/// A question about a randomly drawn dataset record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomQuestion {
    pub category: Category,
    pub record_id: u32,
    pub generated: GeneratedQuestion,
}

/// Service for generating trivia questions
pub struct TriviaService<L: LlmPort> {
    llm: Arc<L>,
}

impl<L: LlmPort> TriviaService<L> {
    pub fn new(llm: Arc<L>) -> Self {
        Self { llm }
    }

    pub fn llm(&self) -> &L {
        &self.llm
    }

    /// Generate a question for `record`, never failing
    pub async fn generate_question(
        &self,
        category: Category,
        record: &DataRecord,
    ) -> GeneratedQuestion {
        match self.generate_with_model(category, record).await {
            Ok(question) => {
                if question.has_placeholder_answer() {
                    tracing::warn!("Model question for {} has no recoverable answer", category);
                }
                tracing::debug!(
                    question = question.question(),
                    answer = question.answer(),
                    "Parsed model question"
                );
                GeneratedQuestion {
                    question,
                    source: QuestionSource::Model,
                }
            }
            Err(e) => {
                tracing::warn!("Model question failed for {}, using template: {}", category, e);
                let question = generate_fallback_question(record, category, &mut rand::thread_rng());
                GeneratedQuestion {
                    question,
                    source: QuestionSource::Fallback,
                }
            }
        }
    }

    /// Ask the model for a question and parse its reply
    pub async fn generate_with_model(
        &self,
        category: Category,
        record: &DataRecord,
    ) -> Result<TriviaQuestion, TriviaServiceError> {
        let prompt = build_question_prompt(category, record);

        let request = LlmRequest::new(vec![ChatMessage::user(prompt)])
            .with_temperature(QUESTION_TEMPERATURE)
            .with_max_tokens(Some(QUESTION_MAX_TOKENS));

        let response = self
            .llm
            .generate(request)
            .await
            .map_err(|e| TriviaServiceError::LlmError(e.to_string()))?;

        tracing::debug!("Model response: {:?}", response.content);

        Ok(parse_model_output(&response.content, record)?)
    }

    /// Draw a record from the dataset and generate a question about it
    ///
    /// Picks `category` (or a random one) and an id in `1..=max_record_id`.
    pub async fn random_question<D: DatasetPort>(
        &self,
        dataset: &D,
        category: Option<Category>,
        max_record_id: u32,
    ) -> Result<RandomQuestion, TriviaServiceError> {
        let (category, record_id) = {
            let mut rng = rand::thread_rng();
            let category = category
                .or_else(|| Category::ALL.choose(&mut rng).copied())
                .unwrap_or(Category::People);
            (category, rng.gen_range(1..=max_record_id.max(1)))
        };

        tracing::info!("Fetching {}/{} for a random question", category, record_id);

        let record = dataset
            .fetch_record(category, record_id)
            .await
            .map_err(|e| TriviaServiceError::DatasetError(e.to_string()))?;

        let generated = self.generate_question(category, &record).await;

        Ok(RandomQuestion {
            category,
            record_id,
            generated,
        })
    }

    /// Whether the model backend is currently reachable
    pub async fn model_available(&self) -> bool {
        self.llm.health_check().await.is_ok()
    }
}
