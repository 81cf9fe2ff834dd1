// src/routes/mod.rs
pub mod kakao;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use kakao::{home_handler, ner_handler};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/kakao/ner", post(ner_handler))
        .layer(TraceLayer::new_for_http())
}
