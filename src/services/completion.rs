use std::{fmt, str::FromStr, sync::Arc};

use async_trait::async_trait;
use thiserror::Error;

use crate::config::SkillConfig;
use crate::error::SkillResult;
use crate::services::{gemini::GeminiBackend, openai::OpenAiBackend};

/// A provider that turns a system prompt plus one user message into reply text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn complete(&self, system_prompt: &str, utterance: &str) -> SkillResult<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    OpenAi,
    Gemini,
}

#[derive(Debug, Error)]
#[error("unknown backend {0:?}, expected \"openai\" or \"gemini\"")]
pub struct UnknownBackend(String);

impl FromStr for Backend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Backend::OpenAi),
            "gemini" => Ok(Backend::Gemini),
            other => Err(UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::OpenAi => f.write_str("openai"),
            Backend::Gemini => f.write_str("gemini"),
        }
    }
}

/// Builds the backend selected by `config.backend`, sharing one HTTP client.
pub fn build_backend(config: &SkillConfig, http: reqwest::Client) -> Arc<dyn CompletionBackend> {
    match config.backend {
        Backend::OpenAi => Arc::new(OpenAiBackend::new(http, config.openai.clone())),
        Backend::Gemini => Arc::new(GeminiBackend::new(http, config.gemini.clone())),
    }
}
