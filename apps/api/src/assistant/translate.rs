use serde::{Deserialize, Serialize};
use tracing::info;

use super::SkillAssistant;
use crate::errors::AppError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translation: String,
}

/// Validates the request and forwards it to the assistant.
pub async fn translate_text(
    assistant: &dyn SkillAssistant,
    request: TranslateRequest,
) -> Result<TranslateResponse, AppError> {
    let (text, target_language) = match (non_blank(request.text), non_blank(request.target_language)) {
        (Some(text), Some(lang)) => (text, lang),
        _ => {
            return Err(AppError::Validation(
                "text and targetLanguage are required".to_string(),
            ))
        }
    };

    let translation = assistant.translate(&text, &target_language).await?;
    info!(target_language = %target_language, chars = text.chars().count(), "text translated");
    Ok(TranslateResponse { translation })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
