//! Skill assistant, the language-model capability used by the AI endpoints.
//!
//! Handlers only see `Arc<dyn SkillAssistant>` from `AppState`, so the
//! failure paths (surfaced 500, trending fallback) are testable without a
//! network. `LlmAssistant` is the production backend; `DisabledAssistant`
//! stands in when no API key is configured.

use async_trait::async_trait;
use serde::Deserialize;

use crate::llm_client::prompts::{RECOMMEND_SYSTEM, TRANSLATE_SYSTEM_TEMPLATE};
use crate::llm_client::{parse_json_reply, LlmClient, LlmError};
use crate::models::Id;

pub mod recommend;
pub mod translate;

#[async_trait]
pub trait SkillAssistant: Send + Sync {
    /// Translates `text` into `target_language`, returning only the translation.
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, LlmError>;

    /// Sends a recommendation prompt and returns the skill ids the model picked,
    /// most relevant first. Ids are not checked against the store here.
    async fn recommend(&self, prompt: &str) -> Result<Vec<Id>, LlmError>;
}

/// The shapes a recommendation reply is accepted in.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecommendationReply {
    Wrapped {
        #[serde(rename = "recommendedSkills")]
        recommended_skills: Vec<Id>,
    },
    Bare(Vec<Id>),
}

impl RecommendationReply {
    fn into_ids(self) -> Vec<Id> {
        match self {
            RecommendationReply::Wrapped { recommended_skills } => recommended_skills,
            RecommendationReply::Bare(ids) => ids,
        }
    }
}

/// Parses the model's recommendation reply into skill ids.
pub fn parse_recommendation_reply(text: &str) -> Result<Vec<Id>, LlmError> {
    parse_json_reply::<RecommendationReply>(text).map(RecommendationReply::into_ids)
}

/// `SkillAssistant` backed by the hosted model.
pub struct LlmAssistant(pub LlmClient);

#[async_trait]
impl SkillAssistant for LlmAssistant {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, LlmError> {
        let system = TRANSLATE_SYSTEM_TEMPLATE.replace("{target_language}", target_language);
        self.0.call_text(text, &system).await
    }

    async fn recommend(&self, prompt: &str) -> Result<Vec<Id>, LlmError> {
        let reply = self.0.call_text(prompt, RECOMMEND_SYSTEM).await?;
        parse_recommendation_reply(&reply)
    }
}

/// Installed when no API key is set. Every call fails.
pub struct DisabledAssistant;

#[async_trait]
impl SkillAssistant for DisabledAssistant {
    async fn translate(&self, _text: &str, _target_language: &str) -> Result<String, LlmError> {
        Err(LlmError::NotConfigured)
    }

    async fn recommend(&self, _prompt: &str) -> Result<Vec<Id>, LlmError> {
        Err(LlmError::NotConfigured)
    }
}
