use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_id, require_text, Id};
use crate::errors::AppError;

/// Translated copy of a skill's text fields for one language.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillTranslation {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// A single short instructional video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    /// Length of the video in seconds.
    pub duration: u32,
    pub category_id: Id,
    /// Creator of the skill.
    pub user_id: Id,
    pub created_at: DateTime<Utc>,
    pub views: u32,
    pub rating: i32,
    pub tags: Option<Vec<String>>,
    /// Keyed by language code.
    pub languages: BTreeMap<String, SkillTranslation>,
}

impl Skill {
    /// Lowercased `title description tags...` text used by search.
    pub fn searchable_text(&self) -> String {
        let tags = self.tags.as_deref().unwrap_or_default().join(" ");
        format!("{} {} {}", self.title, self.description, tags).to_lowercase()
    }
}

/// Upload payload for `POST /api/skills`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    pub title: String,
    pub description: String,
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub duration: u32,
    pub category_id: Id,
    pub user_id: Id,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl NewSkill {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)?;
        require_text("videoUrl", &self.video_url)?;
        if self.duration == 0 {
            return Err(AppError::Validation(
                "duration must be at least one second".to_string(),
            ));
        }
        require_id("categoryId", self.category_id)?;
        require_id("userId", self.user_id)
    }
}
