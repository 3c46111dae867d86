#![allow(dead_code)]
//! # Common Test Utilities
//!
//! This module provides shared utilities for testing, such as mock providers,
//! to ensure tests are isolated and repeatable.

use async_trait::async_trait;
use dotenvy::dotenv;
use listing_gen::{
    providers::ai::AiProvider, types::CompletionRequest, ListingClient, ListingClientBuilder,
    ListingError,
};
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

// --- Mock AI Provider for Logic Testing ---

/// Replays canned completions in order and records every request it receives.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<CompletionRequest>>>,
    pub responses: Arc<RwLock<Vec<Result<String, String>>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self::with_results(responses.into_iter().map(Ok).collect())
    }

    /// `Err` entries are returned as `ListingError::AiApi`.
    pub fn with_results(responses: Vec<Result<String, String>>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ListingError> {
        self.call_history.write().unwrap().push(request.clone());

        match self.responses.write().unwrap().pop() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ListingError::AiApi(message)),
            None => Ok("Default mock response".to_string()),
        }
    }
}

/// A client wired to the mock provider with a credential configured.
pub fn client_with(mock: &MockAiProvider) -> ListingClient {
    ListingClientBuilder::new()
        .ai_provider(Box::new(mock.clone()))
        .api_key_set(true)
        .build()
}
