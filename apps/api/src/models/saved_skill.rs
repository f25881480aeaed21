use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_id, Id};
use crate::errors::AppError;

/// A user's bookmark of a skill. The same pair may be bookmarked more than once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedSkill {
    pub id: Id,
    pub user_id: Id,
    pub skill_id: Id,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedSkill {
    pub user_id: Id,
    pub skill_id: Id,
}

impl NewSavedSkill {
    pub fn validate(&self) -> Result<(), AppError> {
        require_id("userId", self.user_id)?;
        require_id("skillId", self.skill_id)
    }
}
