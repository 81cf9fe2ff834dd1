// src/message.rs
use serde::{Deserialize, Serialize};

pub const SKILL_VERSION: &str = "2.0";

/// Inbound webhook payload. Only `userRequest.utterance` is read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    pub user_request: UserRequest,
}

#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub utterance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResponse {
    pub version: String,
    pub template: SkillTemplate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTemplate {
    pub outputs: Vec<Output>,
}

/// One display block. Serialized externally tagged: `{"simpleText": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    #[serde(rename = "simpleText")]
    SimpleText(SimpleText),
    #[serde(rename = "textCard")]
    TextCard(TextCard),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleText {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCard {
    pub title: String,
    pub description: String,
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub action: String,
    pub label: String,
    pub web_link_url: String,
}

impl Button {
    pub fn web_link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            action: "webLink".to_string(),
            label: label.into(),
            web_link_url: url.into(),
        }
    }
}

impl SkillResponse {
    fn single(output: Output) -> Self {
        Self {
            version: SKILL_VERSION.to_string(),
            template: SkillTemplate {
                outputs: vec![output],
            },
        }
    }

    pub fn simple_text(text: impl Into<String>) -> Self {
        Self::single(Output::SimpleText(SimpleText { text: text.into() }))
    }

    pub fn text_card(
        title: impl Into<String>,
        description: impl Into<String>,
        button: Button,
    ) -> Self {
        Self::single(Output::TextCard(TextCard {
            title: title.into(),
            description: description.into(),
            buttons: vec![button],
        }))
    }
}
