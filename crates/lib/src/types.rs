//! # Shared Types
//!
//! Provider-neutral chat completion types plus the request-scoped values that
//! flow through the listing pipeline.

use serde::{Deserialize, Serialize};

/// The role of a single chat message.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A reference to an image, usually an inline `data:` URI.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageUrl {
    pub url: String,
}

/// One part of a multimodal message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

/// The content of a chat message: either plain text or a list of parts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// A single message in a chat-style completion request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Parts(parts),
        }
    }
}

/// A provider-neutral completion request.
///
/// Every `AiProvider` translates this into its own wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// An uploaded product image, held in memory for the duration of one request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    /// The content type declared by the uploader, if any.
    pub content_type: Option<String>,
}

/// A form field scanned from the marketplace listing page.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FormField {
    #[serde(default)]
    pub selector: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// A generated value for one form field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FormFieldValue {
    pub selector: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Fixed manufacturer, packer and importer details for the form-fill prompt.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SellerProfile {
    pub name: String,
    pub address: String,
    pub pincode: String,
}
