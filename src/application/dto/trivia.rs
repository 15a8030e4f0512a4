use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::services::RandomQuestion;
use crate::domain::entities::{QuestionSource, TriviaQuestion};
use crate::domain::value_objects::{Category, DataRecord, DataRecordError};

/// Body of `POST /generate-question`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuestionRequestDto {
    pub category: Category,
    /// The record, normally as a JSON-encoded string. A plain JSON object
    /// is accepted as well.
    pub context: Value,
}

impl GenerateQuestionRequestDto {
    pub fn record(&self) -> Result<DataRecord, DataRecordError> {
        match &self.context {
            Value::String(json) => DataRecord::from_json_str(json),
            other => DataRecord::from_value(other.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaQuestionDto {
    pub question: String,
    pub answer: String,
}

impl From<TriviaQuestion> for TriviaQuestionDto {
    fn from(question: TriviaQuestion) -> Self {
        let (question, answer) = question.into_parts();
        Self { question, answer }
    }
}

/// Query string of `GET /api/questions/random`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RandomQuestionQueryDto {
    #[serde(default)]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomQuestionResponseDto {
    pub category: Category,
    pub record_id: u32,
    pub question: String,
    pub answer: String,
    pub source: QuestionSource,
}

impl From<RandomQuestion> for RandomQuestionResponseDto {
    fn from(random: RandomQuestion) -> Self {
        let (question, answer) = random.generated.question.into_parts();
        Self {
            category: random.category,
            record_id: random.record_id,
            question,
            answer,
            source: random.generated.source,
        }
    }
}

/// Body of `GET /api/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponseDto {
    pub llm_provider: String,
    pub model_available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_as_encoded_string() {
        let dto: GenerateQuestionRequestDto = serde_json::from_str(
            r#"{"category":"starships","context":"{\"name\":\"Slave I\",\"crew\":\"1\"}"}"#,
        )
        .unwrap();

        let record = dto.record().unwrap();
        assert_eq!(dto.category, Category::Starships);
        assert_eq!(record.name(), Some("Slave I"));
        assert_eq!(record.get_text("crew"), Some("1"));
    }

    #[test]
    fn test_context_as_object() {
        let dto: GenerateQuestionRequestDto =
            serde_json::from_str(r#"{"category":"people","context":{"name":"Leia Organa"}}"#)
                .unwrap();

        assert_eq!(dto.record().unwrap().name(), Some("Leia Organa"));
    }

    #[test]
    fn test_context_string_must_hold_an_object() {
        let dto: GenerateQuestionRequestDto =
            serde_json::from_str(r#"{"category":"people","context":"\"Leia\""}"#).unwrap();

        assert!(dto.record().is_err());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = serde_json::from_str::<GenerateQuestionRequestDto>(
            r#"{"category":"vehicles","context":"{}"}"#,
        );
        assert!(result.is_err());
    }
}
