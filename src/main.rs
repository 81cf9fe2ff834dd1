use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::info;

use kakao_ner::{config::SkillConfig, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,kakao_ner=debug,tower_http=debug")
            }),
        )
        .init();

    let config = SkillConfig::from_env()?;
    let bind_addr = config.bind_addr.clone();
    info!(
        backend = %config.backend,
        openai_key = config.openai.api_key.is_some(),
        gemini_key = config.gemini.api_key.is_some(),
        "loaded configuration"
    );

    let state = Arc::new(AppState::new(config)?);

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;

    info!(addr = %bind_addr, "kakao NER skill listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
