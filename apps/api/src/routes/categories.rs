use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::extract::{parse_id, ApiJson};
use crate::models::{Category, NewCategory};
use crate::state::AppState;

/// GET /api/categories
pub async fn handle_list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    let store = state.store.read().await;
    Json(store.categories())
}

/// GET /api/categories/:id
pub async fn handle_get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, AppError> {
    let id = parse_id(&id, "category")?;
    let store = state.store.read().await;
    store
        .category(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
}

/// POST /api/categories
pub async fn handle_create_category(
    State(state): State<AppState>,
    ApiJson(new_category): ApiJson<NewCategory>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    new_category.validate()?;
    let category = state.store.write().await.create_category(new_category);
    Ok((StatusCode::CREATED, Json(category)))
}
