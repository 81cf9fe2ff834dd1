use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use tracing::{Instrument, info_span};
use uuid::Uuid;

use crate::{error::SkillError, message::SkillResponse, services::ner, state::SharedState};

pub const HOME_TEXT: &str = "Home page is working!";

pub async fn home_handler() -> &'static str {
    HOME_TEXT
}

// Body is taken raw, and its rejection kept, so an unreadable or oversized
// payload still gets the apology envelope with 200.
pub async fn ner_handler(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Json<SkillResponse> {
    let span = info_span!("kakao_ner", request_id = %Uuid::new_v4());
    let backend = state.backend.as_ref();
    let text = &state.config.text;

    let response = match body {
        Ok(body) => ner::respond(backend, text, &body).instrument(span).await,
        Err(rejection) => span.in_scope(|| {
            ner::apologize(backend.name(), text, &SkillError::from(rejection))
        }),
    };
    Json(response)
}
