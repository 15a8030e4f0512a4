//! Application layer - Use cases, ports and DTOs
//!
//! This layer contains:
//! - Ports: Traits for the language model and the dataset
//! - Services: Question generation (model first, templates as fallback)
//! - DTOs: Request/response shapes for the HTTP boundary

pub mod dto;
pub mod ports;
pub mod services;
