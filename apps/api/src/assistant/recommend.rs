//! Recommendation flow: snapshot the catalogue, ask the assistant, keep only
//! ids that name real skills.

use std::collections::HashSet;
use std::fmt::Write;

use serde::Deserialize;
use tracing::info;

use super::SkillAssistant;
use crate::errors::AppError;
use crate::llm_client::prompts::{RECOMMEND_INTRO, RECOMMEND_OUTPUT_INSTRUCTION};
use crate::models::{Id, Skill};
use crate::store::SharedStore;

/// Number of trending skills returned when the request carries no signal.
pub const FALLBACK_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(default)]
    pub user_id: Option<Id>,
    /// Skills the user has already watched.
    #[serde(default)]
    pub skill_ids: Option<Vec<Id>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
}

pub async fn recommend_skills(
    store: &SharedStore,
    assistant: &dyn SkillAssistant,
    request: RecommendRequest,
) -> Result<Vec<Skill>, AppError> {
    let user_id = request
        .user_id
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::Validation("userId is required".to_string()))?;

    let watched = request.skill_ids.unwrap_or_default();
    let interests: Vec<String> = request
        .interests
        .unwrap_or_default()
        .into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect();

    // The lock is released before the model call.
    let catalogue = {
        let store = store.read().await;
        let skills = store.skills();
        if skills.is_empty() {
            return Ok(Vec::new());
        }
        if watched.is_empty() && interests.is_empty() {
            return Ok(store.trending_skills(FALLBACK_LIMIT));
        }
        skills
    };

    let prompt = build_recommendation_prompt(&catalogue, &watched, &interests);
    let ids = assistant.recommend(&prompt).await?;
    let recommended = resolve_recommendations(&catalogue, &ids);

    info!(
        user_id,
        suggested = ids.len(),
        returned = recommended.len(),
        "recommendations resolved"
    );
    Ok(recommended)
}

/// Builds the recommendation prompt: watched skills, interests, then every
/// skill the user has not watched yet.
pub fn build_recommendation_prompt(skills: &[Skill], watched: &[Id], interests: &[String]) -> String {
    let watched: HashSet<Id> = watched.iter().copied().collect();
    let mut prompt = String::from(RECOMMEND_INTRO);

    if !watched.is_empty() {
        prompt.push_str("\n\nWatched Skills:");
        for skill in skills.iter().filter(|s| watched.contains(&s.id)) {
            let _ = write!(prompt, "\n- {} ({})", skill.title, skill.description);
        }
    }

    if !interests.is_empty() {
        prompt.push_str("\n\nInterests:");
        for interest in interests {
            let _ = write!(prompt, "\n- {interest}");
        }
    }

    prompt.push_str("\n\nAvailable Skills:");
    for skill in skills.iter().filter(|s| !watched.contains(&s.id)) {
        let _ = write!(
            prompt,
            "\n- ID: {}, Title: {}, Description: {}",
            skill.id, skill.title, skill.description
        );
    }

    prompt.push_str("\n\n");
    prompt.push_str(RECOMMEND_OUTPUT_INSTRUCTION);
    prompt
}

/// Maps model-chosen ids to skills, in the model's order. Unknown and repeated
/// ids are dropped.
pub fn resolve_recommendations(skills: &[Skill], ids: &[Id]) -> Vec<Skill> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(**id))
        .filter_map(|id| skills.iter().find(|s| s.id == *id).cloned())
        .collect()
}
