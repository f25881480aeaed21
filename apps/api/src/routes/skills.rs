use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extract::{parse_id, ApiJson};
use crate::models::{Id, NewSkill, Skill};
use crate::state::AppState;

/// Query string of `GET /api/skills`. Values are kept raw so that unparseable
/// ones are ignored instead of rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillListQuery {
    pub category_id: Option<String>,
    pub q: Option<String>,
    pub trending: Option<String>,
    pub limit: Option<String>,
}

/// The listing a `SkillListQuery` selects, in precedence order.
#[derive(Debug, PartialEq)]
enum SkillListing {
    Search(String),
    Category(Id),
    Trending(usize),
    All,
}

impl SkillListQuery {
    fn listing(&self, default_trending_limit: usize) -> SkillListing {
        if let Some(q) = self.q.as_deref().filter(|q| !q.trim().is_empty()) {
            return SkillListing::Search(q.to_string());
        }
        if let Some(id) = self
            .category_id
            .as_deref()
            .and_then(|raw| raw.trim().parse::<Id>().ok())
            .filter(|id| *id > 0)
        {
            return SkillListing::Category(id);
        }
        if self.trending.as_deref() == Some("true") {
            let limit = self
                .limit
                .as_deref()
                .and_then(|raw| raw.trim().parse::<usize>().ok())
                .unwrap_or(default_trending_limit);
            return SkillListing::Trending(limit);
        }
        SkillListing::All
    }
}

/// GET /api/skills?categoryId=&q=&trending=&limit=
pub async fn handle_list_skills(
    State(state): State<AppState>,
    Query(query): Query<SkillListQuery>,
) -> Json<Vec<Skill>> {
    let store = state.store.read().await;
    let skills = match query.listing(state.config.trending_limit) {
        SkillListing::Search(q) => store.search_skills(&q),
        SkillListing::Category(id) => store.skills_by_category(id),
        SkillListing::Trending(limit) => store.trending_skills(limit),
        SkillListing::All => store.skills(),
    };
    Json(skills)
}

/// GET /api/skills/featured
pub async fn handle_featured_skill(
    State(state): State<AppState>,
) -> Result<Json<Skill>, AppError> {
    let store = state.store.read().await;
    store
        .featured_skill()
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No featured skill found".to_string()))
}

/// GET /api/skills/:id
///
/// Counts as a view: the returned skill already includes this request.
pub async fn handle_get_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Skill>, AppError> {
    let id = parse_id(&id, "skill")?;
    let mut store = state.store.write().await;
    store
        .increment_views(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Skill not found".to_string()))
}

/// POST /api/skills
pub async fn handle_create_skill(
    State(state): State<AppState>,
    ApiJson(new_skill): ApiJson<NewSkill>,
) -> Result<(StatusCode, Json<Skill>), AppError> {
    new_skill.validate()?;
    let skill = state.store.write().await.create_skill(new_skill)?;
    Ok((StatusCode::CREATED, Json(skill)))
}
