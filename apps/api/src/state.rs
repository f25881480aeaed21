use std::sync::Arc;

use crate::assistant::SkillAssistant;
use crate::config::Config;
use crate::store::SharedStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    /// Language-model capability. Default: `LlmAssistant`, or `DisabledAssistant`
    /// when no API key is configured.
    pub assistant: Arc<dyn SkillAssistant>,
    pub config: Config,
}
