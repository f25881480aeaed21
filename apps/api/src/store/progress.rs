use chrono::Utc;
use tracing::info;

use super::{Store, StoreError};
use crate::models::{Id, NewProgress, UserProgress};

impl Store {
    pub fn user_progress(&self, user_id: Id) -> Vec<UserProgress> {
        self.progress.filter_cloned(|progress| progress.user_id == user_id)
    }

    /// Records that `user_id` watched `skill_id`.
    ///
    /// Keeps a single row per (user, skill): an existing row has its
    /// `last_watched` refreshed and `completed` can only go from false to true.
    pub fn upsert_progress(&mut self, new: NewProgress) -> Result<UserProgress, StoreError> {
        self.require_user(new.user_id)?;
        self.require_skill(new.skill_id)?;

        let now = Utc::now();
        let existing = self
            .progress
            .find_entry(|p| p.user_id == new.user_id && p.skill_id == new.skill_id)
            .map(|(id, _)| id);

        if let Some(row) = existing.and_then(|id| self.progress.get_mut(id)) {
            row.completed = new.completed || row.completed;
            row.last_watched = now;
            return Ok(row.clone());
        }

        let progress = self
            .progress
            .insert_with(|id| UserProgress {
                id,
                user_id: new.user_id,
                skill_id: new.skill_id,
                completed: new.completed,
                last_watched: now,
            })
            .clone();

        info!(
            user_id = progress.user_id,
            skill_id = progress.skill_id,
            "progress started"
        );
        Ok(progress)
    }
}
