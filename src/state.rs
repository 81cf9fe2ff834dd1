// src/state.rs
use std::sync::Arc;

use anyhow::Context;

use crate::config::SkillConfig;
use crate::services::completion::{CompletionBackend, build_backend};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: SkillConfig,
    pub backend: Arc<dyn CompletionBackend>,
}

impl AppState {
    /// Builds the state with the backend named in `config`.
    pub fn new(config: SkillConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;
        let backend = build_backend(&config, http);
        Ok(Self { config, backend })
    }

    pub fn with_backend(config: SkillConfig, backend: Arc<dyn CompletionBackend>) -> Self {
        Self { config, backend }
    }
}
