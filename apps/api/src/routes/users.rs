use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::extract::{parse_id, ApiJson};
use crate::models::{NewUser, PublicUser, User};
use crate::state::AppState;

/// POST /api/users
///
/// The response includes the password; only reads strip it.
pub async fn handle_create_user(
    State(state): State<AppState>,
    ApiJson(new_user): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<User>), AppError> {
    new_user.validate()?;
    let user = state.store.write().await.create_user(new_user)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PublicUser>, AppError> {
    let id = parse_id(&id, "user")?;
    let store = state.store.read().await;
    let user = store
        .user(id)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(PublicUser::from(user)))
}
