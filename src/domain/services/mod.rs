//! Domain services - Pure business logic operations

mod fallback_question;

pub use fallback_question::{generate_fallback_question, qualifying_fields};
