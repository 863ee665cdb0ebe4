use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

/// Body of `POST /channels/{channel}/messages`.
#[derive(Debug, Serialize)]
pub struct OutgoingMessage<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<[&'a Embed; 1]>,
}

impl<'a> OutgoingMessage<'a> {
    pub fn text(content: &'a str) -> Self {
        Self { content: Some(content), embeds: None }
    }

    pub fn embed(embed: &'a Embed) -> Self {
        Self { content: None, embeds: Some([embed]) }
    }
}
