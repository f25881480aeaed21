use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::store::ReferencePolicy;

/// Application configuration loaded from environment variables.
/// Every variable is optional; unparseable values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Without a key the AI endpoints answer 500.
    pub anthropic_api_key: Option<String>,
    pub llm_timeout_secs: u64,
    pub llm_max_retries: u32,
    pub reference_policy: ReferencePolicy,
    /// Default size of `GET /api/skills?trending=true`.
    pub trending_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            anthropic_api_key: None,
            llm_timeout_secs: 60,
            llm_max_retries: 3,
            reference_policy: ReferencePolicy::Permissive,
            trending_limit: 8,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let enforce_references: bool = parse_env("ENFORCE_REFERENCES", false)?;
        let llm_timeout_secs = parse_timeout_secs("LLM_TIMEOUT_SECS", defaults.llm_timeout_secs)?;

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            llm_timeout_secs,
            llm_max_retries: parse_env("LLM_MAX_RETRIES", defaults.llm_max_retries)?,
            reference_policy: if enforce_references {
                ReferencePolicy::Strict
            } else {
                ReferencePolicy::Permissive
            },
            trending_limit: parse_env("TRENDING_LIMIT", defaults.trending_limit)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// A zero timeout would fail every model call before it is sent.
fn parse_timeout_secs(key: &str, default: u64) -> Result<u64> {
    let secs: u64 = parse_env(key, default)?;
    ensure!(secs >= 1, "Environment variable '{key}' must be at least 1 second, got {secs}");
    Ok(secs)
}
