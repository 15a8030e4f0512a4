//! HTTP routes - game page and question API

mod page_routes;
mod trivia_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Game front end
        .route("/", get(page_routes::index))
        // Question generation
        .route("/generate-question", post(trivia_routes::generate_question))
        .route("/api/questions/random", get(trivia_routes::random_question))
        .route("/api/status", get(trivia_routes::status))
}
