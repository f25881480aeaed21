use serde::{Deserialize, Serialize};

use super::{require_text, Id};
use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Id,
    pub name: String,
    /// Icon name understood by the web client (e.g. `laptop-code`).
    pub icon: String,
    /// Display color token, usually a hex string.
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl NewCategory {
    pub fn new(name: &str, icon: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_text("icon", &self.icon)?;
        require_text("color", &self.color)
    }
}
