use std::collections::HashSet;

use chrono::Utc;
use tracing::info;

use super::{Store, StoreError};
use crate::models::{Id, NewSavedSkill, SavedSkill, Skill};

impl Store {
    /// Skills bookmarked by `user_id`, in skill insertion order, each once.
    /// Bookmarks pointing at skills that no longer exist are skipped.
    pub fn saved_skills(&self, user_id: Id) -> Vec<Skill> {
        let bookmarked: HashSet<Id> = self
            .saved_skills
            .iter()
            .filter(|saved| saved.user_id == user_id)
            .map(|saved| saved.skill_id)
            .collect();

        self.skills.filter_cloned(|skill| bookmarked.contains(&skill.id))
    }

    /// Appends a bookmark. Bookmarking the same skill twice stores two rows.
    pub fn save_skill(&mut self, new: NewSavedSkill) -> Result<SavedSkill, StoreError> {
        self.require_user(new.user_id)?;
        self.require_skill(new.skill_id)?;

        let now = Utc::now();
        let saved = self
            .saved_skills
            .insert_with(|id| SavedSkill {
                id,
                user_id: new.user_id,
                skill_id: new.skill_id,
                saved_at: now,
            })
            .clone();

        info!(user_id = saved.user_id, skill_id = saved.skill_id, "skill saved");
        Ok(saved)
    }

    /// Removes the oldest bookmark of `skill_id` by `user_id`, if any.
    /// Returns whether a row was removed.
    pub fn unsave_skill(&mut self, user_id: Id, skill_id: Id) -> bool {
        let found = self
            .saved_skills
            .find_entry(|saved| saved.user_id == user_id && saved.skill_id == skill_id)
            .map(|(id, _)| id);

        match found {
            Some(id) => {
                self.saved_skills.remove(id);
                info!(user_id, skill_id, "skill unsaved");
                true
            }
            None => false,
        }
    }
}
