use kakao_ner::config::{APOLOGY_TEXT, SYSTEM_PROMPT, SkillConfig};
use kakao_ner::message::{Output, SkillResponse};
use kakao_ner::routes::create_router;
use kakao_ner::state::AppState;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tower::util::ServiceExt;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(vars: &[(&str, &str)]) -> SkillConfig {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    SkillConfig::from_lookup(move |key| map.get(key).cloned()).unwrap()
}

async fn call(config: SkillConfig, utterance: &str) -> SkillResponse {
    let state = Arc::new(AppState::new(config).unwrap());
    let app = create_router().with_state(state);
    let body = json!({ "userRequest": { "utterance": utterance } }).to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/kakao/ner")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

fn card_description(resp: &SkillResponse) -> Option<&str> {
    match resp.template.outputs.as_slice() {
        [Output::TextCard(card)] => Some(card.description.as_str()),
        _ => None,
    }
}

#[tokio::test]
async fn test_openai_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "temperature": 0.0,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": "카카오는 판교에 있다" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "카카오 - ORGANIZATION" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let resp = call(
        config(&[("OPENAI_API_KEY", "sk-test"), ("OPENAI_BASE_URL", uri.as_str())]),
        "카카오는 판교에 있다",
    )
    .await;

    assert_eq!(card_description(&resp), Some("카카오 - ORGANIZATION"));
}

#[tokio::test]
async fn test_gemini_selected_by_config() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Seoul - LOCATION" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let resp = call(
        config(&[
            ("LLM_BACKEND", "gemini"),
            ("GEMINI_API_KEY", "g-key"),
            ("GEMINI_BASE_URL", uri.as_str()),
        ]),
        "I flew to Seoul",
    )
    .await;

    assert_eq!(card_description(&resp), Some("Seoul - LOCATION"));
}

#[tokio::test]
async fn test_missing_credential_returns_apology() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let resp = call(config(&[("OPENAI_BASE_URL", uri.as_str())]), "hello").await;

    assert_eq!(resp.version, "2.0");
    match resp.template.outputs.as_slice() {
        [Output::SimpleText(t)] => assert_eq!(t.text, APOLOGY_TEXT),
        other => panic!("expected apology, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upstream_error_returns_apology() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let resp = call(
        config(&[("OPENAI_API_KEY", "sk-test"), ("OPENAI_BASE_URL", uri.as_str())]),
        "hello",
    )
    .await;

    assert_eq!(resp.version, "2.0");
    match resp.template.outputs.as_slice() {
        [Output::SimpleText(t)] => assert_eq!(t.text, APOLOGY_TEXT),
        other => panic!("expected apology, got {other:?}"),
    }
}
