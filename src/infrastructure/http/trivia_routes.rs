//! Trivia API routes - question generation for the game page

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{
    GenerateQuestionRequestDto, RandomQuestionQueryDto, RandomQuestionResponseDto,
    StatusResponseDto, TriviaQuestionDto,
};
use crate::application::services::TriviaServiceError;
use crate::infrastructure::state::AppState;

/// Generate a question for a record the client already fetched
///
/// Model problems never fail this request; the template generator answers
/// instead.
pub async fn generate_question(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateQuestionRequestDto>,
) -> Result<Json<TriviaQuestionDto>, (StatusCode, String)> {
    tracing::info!("Received request to generate a {} question", req.category);

    let record = req
        .record()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let generated = state
        .trivia_service
        .generate_question(req.category, &record)
        .await;

    tracing::info!(
        source = %generated.source,
        question = generated.question.question(),
        answer = generated.question.answer(),
        "Generated question"
    );

    Ok(Json(generated.question.into()))
}

/// Fetch a random record from SWAPI and generate a question about it
pub async fn random_question(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RandomQuestionQueryDto>,
) -> Result<Json<RandomQuestionResponseDto>, (StatusCode, String)> {
    let random = state
        .trivia_service
        .random_question(
            &state.dataset_client,
            query.category,
            state.config.swapi_max_record_id,
        )
        .await
        .map_err(|e| match e {
            TriviaServiceError::DatasetError(_) => {
                tracing::error!("Failed to fetch Star Wars data: {}", e);
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        })?;

    Ok(Json(random.into()))
}

/// Report which model backend is configured and whether it answers
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponseDto> {
    let model_available = state.trivia_service.model_available().await;

    Json(StatusResponseDto {
        llm_provider: state.trivia_service.llm().provider().as_str().to_string(),
        model_available,
    })
}
