use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::extract::{parse_id, ApiJson};
use crate::models::{NewProgress, UserProgress};
use crate::state::AppState;

/// GET /api/users/:userId/progress
pub async fn handle_list_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<UserProgress>>, AppError> {
    let user_id = parse_id(&user_id, "user")?;
    let store = state.store.read().await;
    Ok(Json(store.user_progress(user_id)))
}

/// POST /api/progress
///
/// Upsert: answers 201 for both a new record and an updated one.
pub async fn handle_upsert_progress(
    State(state): State<AppState>,
    ApiJson(new_progress): ApiJson<NewProgress>,
) -> Result<(StatusCode, Json<UserProgress>), AppError> {
    new_progress.validate()?;
    let progress = state.store.write().await.upsert_progress(new_progress)?;
    Ok((StatusCode::CREATED, Json(progress)))
}
