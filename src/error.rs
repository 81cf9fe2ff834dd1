//! Errors a webhook call can end in.

use thiserror::Error;

pub type SkillResult<T> = Result<T, SkillError>;

#[derive(Debug, Error)]
pub enum SkillError {
    /// Body was not JSON or had no `userRequest.utterance` string.
    #[error("invalid skill request: {0}")]
    InvalidRequest(String),

    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),

    /// Network failure, non-success status or an empty reply from the provider.
    #[error("completion provider failed: {0}")]
    Upstream(String),
}

impl SkillError {
    /// True when the caller sent something we could not use.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SkillError::InvalidRequest(_))
    }
}

impl From<reqwest::Error> for SkillError {
    fn from(e: reqwest::Error) -> Self {
        SkillError::Upstream(e.to_string())
    }
}

impl From<axum::extract::rejection::BytesRejection> for SkillError {
    fn from(e: axum::extract::rejection::BytesRejection) -> Self {
        SkillError::InvalidRequest(e.body_text())
    }
}

impl From<serde_json::Error> for SkillError {
    fn from(e: serde_json::Error) -> Self {
        SkillError::InvalidRequest(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_invalid_request_is_a_client_error() {
        assert!(SkillError::InvalidRequest("no utterance".into()).is_client_error());
        assert!(!SkillError::MissingCredential("OPENAI_API_KEY").is_client_error());
        assert!(!SkillError::Upstream("503 Service Unavailable".into()).is_client_error());
    }

    #[test]
    fn bad_json_maps_to_invalid_request() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(SkillError::from(parse_err).is_client_error());
    }
}
