//! Game page route

use axum::response::Html;

const INDEX_HTML: &str = include_str!("assets/index.html");

/// Serve the single-page trivia game
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
