//! Model-assisted question generation helpers

pub mod prompt_builder;
pub mod response_parser;

pub use prompt_builder::build_question_prompt;
pub use response_parser::{parse_model_output, ResponseParseError};
