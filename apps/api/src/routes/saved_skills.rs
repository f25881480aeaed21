use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::extract::{parse_id, ApiJson};
use crate::models::{NewSavedSkill, SavedSkill, Skill};
use crate::state::AppState;

/// GET /api/users/:userId/saved-skills
pub async fn handle_list_saved_skills(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Skill>>, AppError> {
    let user_id = parse_id(&user_id, "user")?;
    let store = state.store.read().await;
    Ok(Json(store.saved_skills(user_id)))
}

/// POST /api/saved-skills
pub async fn handle_save_skill(
    State(state): State<AppState>,
    ApiJson(new_saved): ApiJson<NewSavedSkill>,
) -> Result<(StatusCode, Json<SavedSkill>), AppError> {
    new_saved.validate()?;
    let saved = state.store.write().await.save_skill(new_saved)?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /api/users/:userId/saved-skills/:skillId
///
/// Always 204 for valid ids, whether or not a bookmark existed.
pub async fn handle_unsave_skill(
    State(state): State<AppState>,
    Path((user_id, skill_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let (user_id, skill_id) = match (parse_id(&user_id, "user"), parse_id(&skill_id, "skill")) {
        (Ok(user_id), Ok(skill_id)) => (user_id, skill_id),
        _ => return Err(AppError::Validation("Invalid IDs".to_string())),
    };
    state.store.write().await.unsave_skill(user_id, skill_id);
    Ok(StatusCode::NO_CONTENT)
}
