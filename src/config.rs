// src/config.rs
use std::env;

use anyhow::{Context, bail};

use crate::services::completion::Backend;

pub const SYSTEM_PROMPT: &str = "You are a named entity recognition (NER) assistant. \
Find every named entity in the user's text and list each one on its own line as \
`entity - TYPE`, where TYPE is one of PERSON, ORGANIZATION, LOCATION, DATE, TIME, \
MONEY, QUANTITY or OTHER. Answer in the language of the user's text. If there are \
no entities, answer with a single line saying so.";

pub const CARD_TITLE: &str = "개체명 인식 결과";
pub const BUTTON_LABEL: &str = "개체명 인식 알아보기";
pub const RESULT_URL: &str = "https://en.wikipedia.org/wiki/Named-entity_recognition";
pub const APOLOGY_TEXT: &str =
    "죄송합니다. 요청을 처리하는 중 문제가 발생했습니다. 잠시 후 다시 시도해 주세요.";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Credentials and endpoint for one completion provider.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    /// `None` when the variable is unset or blank; checked per request.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

/// Static text the skill answers with.
#[derive(Clone, Debug)]
pub struct SkillText {
    pub system_prompt: String,
    pub card_title: String,
    pub button_label: String,
    pub button_url: String,
    pub apology: String,
}

impl Default for SkillText {
    fn default() -> Self {
        Self {
            system_prompt: SYSTEM_PROMPT.to_string(),
            card_title: CARD_TITLE.to_string(),
            button_label: BUTTON_LABEL.to_string(),
            button_url: RESULT_URL.to_string(),
            apology: APOLOGY_TEXT.to_string(),
        }
    }
}

/// Process configuration, read once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct SkillConfig {
    pub bind_addr: String,
    pub backend: Backend,
    pub openai: ProviderConfig,
    pub gemini: ProviderConfig,
    pub text: SkillText,
}

impl SkillConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable          | Default                                            |
    /// |-------------------|----------------------------------------------------|
    /// | `BIND_ADDR`       | `0.0.0.0:5000`                                     |
    /// | `LLM_BACKEND`     | `openai`                                           |
    /// | `OPENAI_API_KEY`  | unset                                              |
    /// | `GEMINI_API_KEY`  | unset                                              |
    /// | `OPENAI_MODEL`    | `gpt-4o-mini`                                      |
    /// | `GEMINI_MODEL`    | `gemini-1.5-flash`                                 |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com/v1`                        |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com/v1beta` |
    /// | `NER_RESULT_URL`  | Wikipedia article on NER                           |
    ///
    /// Missing API keys are not an error here; the request that needs one fails instead.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SkillConfig::from_env`] but with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let secret = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match lookup("LLM_BACKEND") {
            Some(raw) if !raw.trim().is_empty() => raw
                .parse::<Backend>()
                .with_context(|| format!("invalid LLM_BACKEND value {raw:?}"))?,
            _ => Backend::default(),
        };

        let bind_addr = or_default("BIND_ADDR", DEFAULT_BIND_ADDR);
        if bind_addr.parse::<std::net::SocketAddr>().is_err() {
            bail!("invalid BIND_ADDR value {bind_addr:?}");
        }

        let text = SkillText {
            button_url: or_default("NER_RESULT_URL", RESULT_URL),
            ..SkillText::default()
        };

        Ok(Self {
            bind_addr,
            backend,
            openai: ProviderConfig {
                api_key: secret("OPENAI_API_KEY"),
                model: or_default("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
                base_url: or_default("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            },
            gemini: ProviderConfig {
                api_key: secret("GEMINI_API_KEY"),
                model: or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                base_url: or_default("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            },
            text,
        })
    }
}
