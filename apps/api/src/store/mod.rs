//! In-memory entity store.
//!
//! One `Store` is built at startup and shared through `AppState` behind a
//! `tokio::sync::RwLock`. Each request holds the lock for its whole store
//! interaction, so every operation below is atomic with respect to other
//! requests. Nothing is persisted.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Category, Id, NewCategory, SavedSkill, Skill, User, UserProgress};

mod categories;
mod progress;
mod saved_skills;
mod skills;
mod table;
mod users;

pub use table::Table;

/// Handle shared by all request handlers.
pub type SharedStore = Arc<RwLock<Store>>;

/// Whether writes check that referenced entities exist and that usernames and
/// emails are unique. `Permissive` accepts any well-formed payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReferencePolicy {
    #[default]
    Permissive,
    Strict,
}

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("{kind} {id} does not exist")]
    MissingReference { kind: &'static str, id: Id },

    #[error("{field} '{value}' is already taken")]
    Duplicate { field: &'static str, value: String },
}

/// Categories every fresh process starts with: (name, icon, color).
pub const DEFAULT_CATEGORIES: [(&str, &str, &str); 6] = [
    ("Programming", "laptop-code", "#0066CC"),
    ("Video Editing", "film", "#00A86B"),
    ("Cooking", "utensils", "#FF5722"),
    ("Design", "paint-brush", "#8B5CF6"),
    ("Languages", "language", "#22C55E"),
    ("Marketing", "bullhorn", "#EAB308"),
];

#[derive(Debug, Default)]
pub struct Store {
    users: Table<User>,
    categories: Table<Category>,
    skills: Table<Skill>,
    saved_skills: Table<SavedSkill>,
    progress: Table<UserProgress>,
    policy: ReferencePolicy,
}

impl Store {
    /// A store seeded with `DEFAULT_CATEGORIES`.
    pub fn new() -> Self {
        let mut store = Self::empty();
        for (name, icon, color) in DEFAULT_CATEGORIES {
            store.create_category(NewCategory::new(name, icon, color));
        }
        store
    }

    /// A store with no rows at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: ReferencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ReferencePolicy {
        self.policy
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    fn is_strict(&self) -> bool {
        self.policy == ReferencePolicy::Strict
    }

    fn require_user(&self, id: Id) -> Result<(), StoreError> {
        if self.is_strict() && !self.users.contains(id) {
            return Err(StoreError::MissingReference { kind: "user", id });
        }
        Ok(())
    }

    fn require_category(&self, id: Id) -> Result<(), StoreError> {
        if self.is_strict() && !self.categories.contains(id) {
            return Err(StoreError::MissingReference {
                kind: "category",
                id,
            });
        }
        Ok(())
    }

    fn require_skill(&self, id: Id) -> Result<(), StoreError> {
        if self.is_strict() && !self.skills.contains(id) {
            return Err(StoreError::MissingReference { kind: "skill", id });
        }
        Ok(())
    }
}
