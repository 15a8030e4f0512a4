//! Prompt building for trivia question requests

use crate::domain::value_objects::{Category, DataRecord};

/// Sampling temperature for question phrasing
pub const QUESTION_TEMPERATURE: f32 = 0.7;
/// Token cap; a question plus an answer line fits comfortably
pub const QUESTION_MAX_TOKENS: u32 = 50;

/// Marker preceding the JSON record inside the prompt
pub const DATA_MARKER: &str = "Use the following data:";

/// Build the user prompt asking for a question about `record`
pub fn build_question_prompt(category: Category, record: &DataRecord) -> String {
    format!(
        "Generate a short, interesting trivia question about this {} from Star Wars. \
         The question should be clear and make sense. {} {}",
        category,
        DATA_MARKER,
        record.to_json_string()
    )
}
