use thiserror::Error;

/// Custom error types for the listing library.
///
/// The variants fall into four families: caller input problems
/// (`Validation`), server-side setup problems (`Configuration`), completions
/// that cannot be turned into the expected shape (`AiResponseFormat`), and
/// everything that goes wrong while talking to the AI provider.
#[derive(Error, Debug)]
pub enum ListingError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    AiResponseFormat(String),
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("Internal regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl ListingError {
    /// Returns `true` when the error was caused by the caller's input rather
    /// than by the server or the upstream AI provider.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ListingError::Validation(_))
    }

    /// Returns `true` for failures that happened while calling the AI provider.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ListingError::AiRequest(_) | ListingError::AiDeserialization(_) | ListingError::AiApi(_)
        )
    }
}
