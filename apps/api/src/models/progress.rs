use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_id, Id};
use crate::errors::AppError;

/// Watch state of one skill for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub id: Id,
    pub user_id: Id,
    pub skill_id: Id,
    pub completed: bool,
    pub last_watched: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgress {
    pub user_id: Id,
    pub skill_id: Id,
    #[serde(default)]
    pub completed: bool,
}

impl NewProgress {
    pub fn validate(&self) -> Result<(), AppError> {
        require_id("userId", self.user_id)?;
        require_id("skillId", self.skill_id)
    }
}
