//! # Application Configuration
//!
//! This module defines the configuration structure for the `listing-gen-server`
//! and provides the logic for loading it from an optional `config.yml` file and
//! environment variables.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use listing_gen::{providers::ai::openai::DEFAULT_OPENAI_MODEL, SellerProfile};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

fn default_port() -> u16 {
    5001
}

fn default_ai_provider() -> String {
    "openai".to_string()
}

fn default_ai_model() -> String {
    DEFAULT_OPENAI_MODEL.to_string()
}

/// Origins allowed by CORS. A trailing `*` matches any suffix.
pub fn default_cors_origins() -> Vec<String> {
    vec![
        "chrome-extension://*".to_string(),
        "http://localhost:*".to_string(),
        "http://127.0.0.1:*".to_string(),
    ]
}

/// The main application configuration structure.
#[derive(Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// The AI credential. Empty values are treated as absent.
    #[serde(default)]
    pub openai_api_key: Option<String>,
    /// `openai` (any OpenAI-compatible endpoint) or `gemini`.
    #[serde(default = "default_ai_provider")]
    pub ai_provider: String,
    #[serde(default)]
    pub ai_api_url: Option<String>,
    #[serde(default = "default_ai_model")]
    pub ai_model: String,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
    /// Seller details offered to the form filler for manufacturer/packer fields.
    #[serde(default)]
    pub seller: Option<SellerProfile>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            openai_api_key: None,
            ai_provider: default_ai_provider(),
            ai_api_url: None,
            ai_model: default_ai_model(),
            cors_origins: default_cors_origins(),
            seller: None,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .field("ai_provider", &self.ai_provider)
            .field("ai_api_url", &self.ai_api_url)
            .field("ai_model", &self.ai_model)
            .field("cors_origins", &self.cors_origins)
            .field("seller", &self.seller)
            .finish()
    }
}

impl AppConfig {
    pub fn api_key_set(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

/// Reads a file and replaces `${VAR}` placeholders with environment values.
/// Returns `Ok(None)` if the file doesn't exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(format!("Invalid substitution pattern: {e}")))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// - Defaults apply when nothing else is set.
/// - `config.yml` next to the crate manifest is read if present. An explicit
///   override path must exist.
/// - Top-level keys are overridden by `PORT`, `OPENAI_API_KEY`, `AI_PROVIDER`,
///   `AI_API_URL`, `AI_MODEL` and `CORS_ORIGINS` (comma separated).
/// - Nested keys are overridden by `LISTING_...` variables
///   (e.g., `LISTING_SELLER__NAME`).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let base_path = env!("CARGO_MANIFEST_DIR");
    let mut builder = ConfigBuilder::builder();

    let config_path = match config_path_override {
        Some(path) => path.to_string(),
        None => format!("{base_path}/config.yml"),
    };

    match read_and_substitute(&config_path)? {
        Some(content) => {
            info!("Loading configuration from '{config_path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None if config_path_override.is_some() => {
            return Err(ConfigError::NotFound(format!(
                "Config file not found at '{config_path}'."
            )));
        }
        None => info!("No config file at '{config_path}'. Using defaults and environment."),
    }

    let settings = builder
        .add_source(
            Environment::default()
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors_origins"),
        )
        .add_source(
            Environment::with_prefix("LISTING")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    config.openai_api_key = config
        .openai_api_key
        .take()
        .filter(|key| !key.trim().is_empty());
    config.ai_provider = config.ai_provider.trim().to_lowercase();
    config.cors_origins = config
        .cors_origins
        .into_iter()
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect();
    if config
        .seller
        .as_ref()
        .is_some_and(|seller| seller.name.trim().is_empty())
    {
        config.seller = None;
    }

    Ok(config)
}
