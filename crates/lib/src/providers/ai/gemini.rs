use crate::{
    errors::ListingError,
    image::split_data_uri,
    providers::ai::AiProvider,
    types::{ChatMessage, CompletionRequest, ContentPart, MessageContent, Role},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

// --- Gemini-specific request and response structures ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Deserialize, Debug)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

fn to_parts(content: &MessageContent) -> Vec<Part> {
    match content {
        MessageContent::Text(text) => vec![Part::Text { text: text.clone() }],
        MessageContent::Parts(parts) => parts
            .iter()
            .map(|part| match part {
                ContentPart::Text { text } => Part::Text { text: text.clone() },
                ContentPart::ImageUrl { image_url } => match split_data_uri(&image_url.url) {
                    Some((mime_type, data)) => Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: data.to_string(),
                        },
                    },
                    // Gemini only accepts inline bytes here; pass remote URLs as text.
                    None => Part::Text {
                        text: image_url.url.clone(),
                    },
                },
            })
            .collect(),
    }
}

fn build_request(request: &CompletionRequest) -> GeminiRequest {
    let (system, conversation): (Vec<&ChatMessage>, Vec<&ChatMessage>) = request
        .messages
        .iter()
        .partition(|m| m.role == Role::System);

    let system_instruction = if system.is_empty() {
        None
    } else {
        Some(Content {
            role: None,
            parts: system.iter().flat_map(|m| to_parts(&m.content)).collect(),
        })
    };

    let contents = conversation
        .iter()
        .map(|m| Content {
            role: Some(match m.role {
                Role::Assistant => "model",
                _ => "user",
            }),
            parts: to_parts(&m.content),
        })
        .collect();

    GeminiRequest {
        system_instruction,
        contents,
        generation_config: GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_tokens,
        },
    }
}

// --- Gemini Provider implementation ---

/// A provider for interacting with the Google Gemini `generateContent` API.
#[derive(Clone)]
pub struct GeminiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    pub fn new(api_url: String, api_key: String) -> Result<Self, ListingError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(ListingError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// Builds the `generateContent` URL for a model name.
    pub fn url_for_model(model: &str) -> String {
        format!("https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent")
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ListingError> {
        let request_body = build_request(request);

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(ListingError::AiRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ListingError::AiApi(error_text));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(ListingError::AiDeserialization)?;

        let raw_response = gemini_response
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();

        Ok(raw_response)
    }
}
