// src/services/ner.rs
use tracing::{error, info};

use crate::config::SkillText;
use crate::error::{SkillError, SkillResult};
use crate::message::{Button, SkillRequest, SkillResponse};
use crate::services::completion::CompletionBackend;

/// Pulls `userRequest.utterance` out of a raw webhook body.
pub fn extract_utterance(body: &[u8]) -> SkillResult<String> {
    let request: SkillRequest = serde_json::from_slice(body)?;
    Ok(request.user_request.utterance)
}

/// Runs one webhook call: extract, ask the backend, wrap the reply in a card.
pub async fn recognize(
    backend: &dyn CompletionBackend,
    text: &SkillText,
    body: &[u8],
) -> SkillResult<SkillResponse> {
    let utterance = extract_utterance(body)?;
    let reply = backend.complete(&text.system_prompt, &utterance).await?;

    Ok(SkillResponse::text_card(
        text.card_title.as_str(),
        reply,
        Button::web_link(text.button_label.as_str(), text.button_url.as_str()),
    ))
}

/// Logs `err` and returns the apology message.
pub fn apologize(backend: &str, text: &SkillText, err: &SkillError) -> SkillResponse {
    error!(
        backend,
        client_error = err.is_client_error(),
        error = %err,
        "falling back to apology"
    );
    SkillResponse::simple_text(text.apology.as_str())
}

/// Same as [`recognize`], but every failure becomes the apology message.
pub async fn respond(
    backend: &dyn CompletionBackend,
    text: &SkillText,
    body: &[u8],
) -> SkillResponse {
    match recognize(backend, text, body).await {
        Ok(response) => {
            info!(backend = backend.name(), "answered with text card");
            response
        }
        Err(e) => apologize(backend.name(), text, &e),
    }
}
