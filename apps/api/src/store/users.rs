use chrono::Utc;
use tracing::info;

use super::{Store, StoreError};
use crate::models::{Id, NewUser, User};

impl Store {
    #[allow(dead_code)]
    pub fn users(&self) -> Vec<User> {
        self.users.iter().cloned().collect()
    }

    pub fn user(&self, id: Id) -> Option<&User> {
        self.users.get(id)
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users
            .find_entry(|user| user.username == username)
            .map(|(_, user)| user)
    }

    /// Stores a new user. Username and email uniqueness is only checked under
    /// the strict policy.
    pub fn create_user(&mut self, new: NewUser) -> Result<User, StoreError> {
        if self.is_strict() {
            if self.user_by_username(&new.username).is_some() {
                return Err(StoreError::Duplicate {
                    field: "username",
                    value: new.username,
                });
            }
            if self.users.iter().any(|user| user.email == new.email) {
                return Err(StoreError::Duplicate {
                    field: "email",
                    value: new.email,
                });
            }
        }

        let now = Utc::now();
        let user = self
            .users
            .insert_with(|id| User {
                id,
                username: new.username,
                password: new.password,
                email: new.email,
                name: new.name,
                bio: new.bio,
                avatar_url: new.avatar_url,
                created_at: now,
            })
            .clone();

        info!(user_id = user.id, username = %user.username, "user created");
        Ok(user)
    }
}
