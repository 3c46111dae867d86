use crate::{
    errors::ListingError,
    providers::ai::AiProvider,
    types::{ChatMessage, CompletionRequest},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::debug;

pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

// --- OpenAI Provider implementation ---

/// A provider for the OpenAI chat completions API, or any server that speaks
/// the same protocol.
#[derive(Clone)]
pub struct OpenAiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .finish()
    }
}

impl OpenAiProvider {
    /// Creates a new `OpenAiProvider`.
    ///
    /// `api_url` and `model` fall back to the public OpenAI endpoint and
    /// `gpt-4o-mini` when not given.
    pub fn new(
        api_url: Option<String>,
        api_key: Option<String>,
        model: Option<String>,
    ) -> Result<Self, ListingError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(ListingError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url: api_url.unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
        })
    }
}

#[async_trait]
impl AiProvider for OpenAiProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ListingError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        };

        let mut request_builder = self.client.post(&self.api_url);

        if let Some(key) = &self.api_key {
            request_builder = request_builder.bearer_auth(key);
        }

        let response = request_builder
            .json(&request_body)
            .send()
            .await
            .map_err(ListingError::AiRequest)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            debug!(%status, "OpenAI-compatible API returned an error");
            return Err(ListingError::AiApi(error_text));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(ListingError::AiDeserialization)?;

        let raw_response = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        Ok(raw_response)
    }
}
