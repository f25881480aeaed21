use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, info};

use super::{Store, StoreError};
use crate::models::{Id, NewSkill, Skill};

impl Store {
    pub fn skills(&self) -> Vec<Skill> {
        self.skills.iter().cloned().collect()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn skill(&self, id: Id) -> Option<&Skill> {
        self.skills.get(id)
    }

    pub fn skills_by_category(&self, category_id: Id) -> Vec<Skill> {
        self.skills.filter_cloned(|skill| skill.category_id == category_id)
    }

    /// Skills ordered by view count, highest first, at most `limit` of them.
    ///
    /// The sort is stable: skills with equal views keep insertion order.
    pub fn trending_skills(&self, limit: usize) -> Vec<Skill> {
        let mut skills = self.skills();
        skills.sort_by_key(|skill| Reverse(skill.views));
        skills.truncate(limit);
        skills
    }

    /// The highest-rated skill; the earliest inserted one wins a tie.
    pub fn featured_skill(&self) -> Option<&Skill> {
        self.skills.iter().min_by_key(|skill| Reverse(skill.rating))
    }

    /// Skills whose title, description or tags contain any whitespace-separated
    /// term of `query`, case-insensitively. A query without terms matches nothing.
    pub fn search_skills(&self, query: &str) -> Vec<Skill> {
        let query = query.to_lowercase();
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let matches = self.skills.filter_cloned(|skill| {
            let text = skill.searchable_text();
            terms.iter().any(|term| text.contains(term))
        });
        debug!(query = %query, hits = matches.len(), "skill search");
        matches
    }

    pub fn create_skill(&mut self, new: NewSkill) -> Result<Skill, StoreError> {
        self.require_category(new.category_id)?;
        self.require_user(new.user_id)?;

        let now = Utc::now();
        let skill = self
            .skills
            .insert_with(|id| Skill {
                id,
                title: new.title,
                description: new.description,
                video_url: new.video_url,
                thumbnail_url: new.thumbnail_url,
                duration: new.duration,
                category_id: new.category_id,
                user_id: new.user_id,
                created_at: now,
                views: 0,
                rating: 0,
                tags: new.tags,
                languages: BTreeMap::new(),
            })
            .clone();

        info!(skill_id = skill.id, title = %skill.title, "skill created");
        Ok(skill)
    }

    /// Adds one view. Returns the updated skill, or `None` for an unknown id.
    pub fn increment_views(&mut self, skill_id: Id) -> Option<&Skill> {
        let skill = self.skills.get_mut(skill_id)?;
        skill.views = skill.views.saturating_add(1);
        Some(&*skill)
    }

    /// Overwrites the rating. Returns `None` for an unknown id.
    /// No route sets ratings yet.
    #[allow(dead_code)]
    pub fn update_rating(&mut self, skill_id: Id, rating: i32) -> Option<&Skill> {
        let skill = self.skills.get_mut(skill_id)?;
        skill.rating = rating;
        Some(&*skill)
    }
}
