//! Video generation API routes

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{ErrorResponseDto, GenerateVideoRequestDto, GenerateVideoResponseDto};
use crate::application::services::GenerationError;
use crate::domain::entities::{VideoGenerationInput, VideoGenerationResult};
use crate::infrastructure::state::AppState;

type ApiError = (StatusCode, Json<ErrorResponseDto>);

/// Generate a video plan and return the summary view
pub async fn generate_video(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateVideoRequestDto>, JsonRejection>,
) -> Result<Json<GenerateVideoResponseDto>, ApiError> {
    let result = run_generation(&state, payload).await?;
    Ok(Json(GenerateVideoResponseDto::from(result)))
}

/// Generate a video plan and return every stage's output
pub async fn generate_video_full(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateVideoRequestDto>, JsonRejection>,
) -> Result<Json<VideoGenerationResult>, ApiError> {
    let result = run_generation(&state, payload).await?;
    Ok(Json(result))
}

async fn run_generation(
    state: &AppState,
    payload: Result<Json<GenerateVideoRequestDto>, JsonRejection>,
) -> Result<VideoGenerationResult, ApiError> {
    let input = parse_input(state, payload)?;

    state
        .generation_service
        .generate(&input)
        .await
        .map_err(|e| {
            tracing::error!("Video generation failed: {}", e);
            error_response(e)
        })
}

fn parse_input(
    state: &AppState,
    payload: Result<Json<GenerateVideoRequestDto>, JsonRejection>,
) -> Result<VideoGenerationInput, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        error_response(GenerationError::InvalidRequest(rejection.body_text()))
    })?;

    request
        .validate(state.config.max_duration_minutes)
        .map_err(error_response)
}

fn error_response(error: GenerationError) -> ApiError {
    match error {
        GenerationError::InvalidRequest(message) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseDto::new("Invalid request", message)),
        ),
        GenerationError::Authoring(e) => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponseDto::new(
                "Generation failed",
                format!(
                    "{}. Check the text-generation service URL, model, and API key, then try again.",
                    e
                ),
            )),
        ),
        GenerationError::Internal(message) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponseDto::new(
                "Generation failed",
                format!("{}. Please try again.", message),
            )),
        ),
    }
}
