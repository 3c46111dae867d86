//! # Application State
//!
//! Holds the listing client shared by all handlers and builds it from the
//! loaded configuration.

use crate::config::AppConfig;
use listing_gen::{
    providers::ai::{gemini::GeminiProvider, openai::OpenAiProvider, AiProvider},
    ListingClient, ListingClientBuilder,
};
use std::sync::Arc;
use tracing::{info, warn};

/// The shared application state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub listing: Arc<ListingClient>,
}

/// Instantiates the configured AI provider.
pub fn build_ai_provider(config: &AppConfig) -> anyhow::Result<Box<dyn AiProvider>> {
    let provider: Box<dyn AiProvider> = match config.ai_provider.as_str() {
        "openai" => Box::new(OpenAiProvider::new(
            config.ai_api_url.clone(),
            config.openai_api_key.clone(),
            Some(config.ai_model.clone()),
        )?),
        "gemini" => {
            // If api_url is not provided in config, construct it from the model name.
            let api_url = config
                .ai_api_url
                .clone()
                .unwrap_or_else(|| GeminiProvider::url_for_model(&config.ai_model));
            Box::new(GeminiProvider::new(
                api_url,
                config.openai_api_key.clone().unwrap_or_default(),
            )?)
        }
        other => return Err(anyhow::anyhow!("Unsupported AI provider: {other}")),
    };
    Ok(provider)
}

/// Builds the shared application state from the configuration.
///
/// A provider that cannot be constructed does not stop the server. It is
/// reported as unavailable by `/health` and every generation request fails
/// with a configuration error instead.
pub fn build_app_state(config: AppConfig) -> AppState {
    let mut builder = ListingClientBuilder::new()
        .api_key_set(config.api_key_set())
        .seller(config.seller.clone());

    match build_ai_provider(&config) {
        Ok(provider) => {
            info!(
                provider = %config.ai_provider,
                model = %config.ai_model,
                "AI provider initialized"
            );
            builder = builder.ai_provider(provider);
        }
        Err(e) => warn!("AI provider unavailable: {e}"),
    }

    if !config.api_key_set() {
        warn!("OPENAI_API_KEY is not set; generation requests will fail");
    }

    AppState {
        listing: Arc::new(builder.build()),
        config: Arc::new(config),
    }
}
