//! Domain layer - Core trivia logic with no I/O
//!
//! This layer contains:
//! - Entities: TriviaQuestion
//! - Value Objects: Category, DataRecord
//! - Domain Services: Template-based fallback question generation

pub mod entities;
pub mod services;
pub mod value_objects;
