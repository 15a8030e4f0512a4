//! Trivia question entity - the question/answer pair shown to the player

use serde::{Deserialize, Serialize};

/// A question and its expected answer, produced fresh for every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaQuestion {
    question: String,
    answer: String,
}

impl TriviaQuestion {
    /// Placeholder answer when model output names no answer we can recover
    pub const UNABLE_TO_DETERMINE: &'static str = "Unable to determine";
    /// Placeholder answer when a record has no usable name
    pub const UNKNOWN: &'static str = "Unknown";

    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Whether the answer is one of the placeholder values
    pub fn has_placeholder_answer(&self) -> bool {
        self.answer == Self::UNABLE_TO_DETERMINE || self.answer == Self::UNKNOWN
    }

    pub fn into_parts(self) -> (String, String) {
        (self.question, self.answer)
    }
}

/// Which generation strategy produced a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSource {
    /// Phrased by the language model
    Model,
    /// Rendered from the built-in templates
    Fallback,
}

impl QuestionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
