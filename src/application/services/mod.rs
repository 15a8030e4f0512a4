//! Application services - Use case implementations
//!
//! Services are generic over the outbound ports so the HTTP layer can plug
//! in real clients while tests plug in in-memory doubles.

pub mod llm;
pub mod trivia_service;

pub use trivia_service::{RandomQuestion, TriviaService, TriviaServiceError};
