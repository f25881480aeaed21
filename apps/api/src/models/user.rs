use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_text, Id};
use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub username: String,
    /// Stored as supplied; never hashed.
    pub password: String,
    pub email: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Signup payload for `POST /api/users`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("username", &self.username)?;
        require_text("password", &self.password)?;
        require_text("email", &self.email)?;
        require_text("name", &self.name)?;
        if !self.email.contains('@') {
            return Err(AppError::Validation(format!(
                "email '{}' is not a valid address",
                self.email
            )));
        }
        Ok(())
    }
}

/// A user as returned by read endpoints: everything except the password.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Id,
    pub username: String,
    pub email: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            bio: user.bio.clone(),
            avatar_url: user.avatar_url.clone(),
            created_at: user.created_at,
        }
    }
}
