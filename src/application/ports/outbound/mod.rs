//! Outbound ports - Interfaces that the application requires from external systems

mod dataset_port;
mod llm_port;

pub use dataset_port::DatasetPort;
pub use llm_port::{ChatMessage, LlmPort, LlmRequest, LlmResponse};
