//! Domain entities

mod trivia_question;

pub use trivia_question::{QuestionSource, TriviaQuestion};
