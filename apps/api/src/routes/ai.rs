//! Axum route handlers for the language-model endpoints.

use axum::{extract::State, Json};

use crate::assistant::recommend::{recommend_skills, RecommendRequest};
use crate::assistant::translate::{translate_text, TranslateRequest, TranslateResponse};
use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::models::Skill;
use crate::state::AppState;

/// POST /api/translate
pub async fn handle_translate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TranslateRequest>,
) -> Result<Json<TranslateResponse>, AppError> {
    let response = translate_text(state.assistant.as_ref(), request).await?;
    Ok(Json(response))
}

/// POST /api/recommend
///
/// Falls back to the top trending skills when neither watched skills nor
/// interests are given.
pub async fn handle_recommend(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RecommendRequest>,
) -> Result<Json<Vec<Skill>>, AppError> {
    let skills = recommend_skills(&state.store, state.assistant.as_ref(), request).await?;
    Ok(Json(skills))
}
