pub mod gemini;
pub mod openai;

use crate::{errors::ListingError, types::CompletionRequest};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI completion provider.
///
/// This trait defines a common interface for chat-style completion APIs
/// (e.g., OpenAI, Gemini). Anything that accepts system and user messages,
/// inline images, a temperature and an output-token ceiling, and returns a
/// single text completion can be plugged in here.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends the request and returns the text of the first completion.
    ///
    /// An empty string is returned when the provider answered without any
    /// completion choices.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ListingError>;
}

dyn_clone::clone_trait_object!(AiProvider);
