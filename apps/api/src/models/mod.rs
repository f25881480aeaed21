pub mod category;
pub mod progress;
pub mod saved_skill;
pub mod skill;
pub mod user;

pub use category::{Category, NewCategory};
pub use progress::{NewProgress, UserProgress};
pub use saved_skill::{NewSavedSkill, SavedSkill};
pub use skill::{NewSkill, Skill};
pub use user::{NewUser, PublicUser, User};

use crate::errors::AppError;

/// Entity identifier. Positive, unique per entity kind, assigned by the store.
pub type Id = u32;

/// Rejects empty or whitespace-only required strings.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Rejects ids that can never have been assigned (ids start at 1).
pub(crate) fn require_id(field: &str, value: Id) -> Result<(), AppError> {
    if value == 0 {
        return Err(AppError::Validation(format!(
            "{field} must be a positive integer"
        )));
    }
    Ok(())
}
