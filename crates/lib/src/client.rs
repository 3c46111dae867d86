use crate::{
    constants::{AI_UNAVAILABLE, API_KEY_MISSING, MISSING_DESCRIPTION, MISSING_FORM_FIELDS},
    errors::ListingError,
    fence::parse_completion_json,
    fields::ListingFieldSet,
    form::postprocess_form_fill,
    prompts::{
        form::{build_form_prompt, FORM_MAX_TOKENS, FORM_TEMPERATURE},
        listing::{
            IMAGE_MAX_TOKENS, IMAGE_SYSTEM_PROMPT, IMAGE_TEMPERATURE, IMAGE_USER_INSTRUCTION,
            TEXT_MAX_TOKENS, TEXT_SYSTEM_PROMPT, TEXT_TEMPERATURE, TEXT_USER_PROMPT,
        },
    },
    providers::ai::AiProvider,
    types::{
        ChatMessage, CompletionRequest, ContentPart, FormField, FormFieldValue, ImageUpload,
        ImageUrl, SellerProfile,
    },
};
use std::fmt;
use tracing::{debug, info};

/// The AI integration as it was set up at startup.
///
/// `provider` is `None` when the integration could not be initialised. The
/// credential flag is tracked separately so that a missing key is reported at
/// call time instead of failing startup.
#[derive(Clone, Debug, Default)]
pub struct AiClientConfig {
    pub provider: Option<Box<dyn AiProvider>>,
    pub api_key_set: bool,
}

impl AiClientConfig {
    pub fn new(provider: Option<Box<dyn AiProvider>>, api_key_set: bool) -> Self {
        Self {
            provider,
            api_key_set,
        }
    }

    /// Whether the integration layer loaded. Says nothing about the credential.
    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Returns the provider if the integration is available and a credential is configured.
    pub fn ready_provider(&self) -> Result<&dyn AiProvider, ListingError> {
        let provider = self
            .provider
            .as_deref()
            .ok_or_else(|| ListingError::Configuration(AI_UNAVAILABLE.to_string()))?;
        if !self.api_key_set {
            return Err(ListingError::Configuration(API_KEY_MISSING.to_string()));
        }
        Ok(provider)
    }
}

/// Drives one listing request: prompt composition, the completion call, and
/// post-processing of the reply.
#[derive(Clone, Default)]
pub struct ListingClient {
    pub ai: AiClientConfig,
    pub seller: Option<SellerProfile>,
}

impl fmt::Debug for ListingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListingClient")
            .field("ai_available", &self.ai.is_available())
            .field("api_key_set", &self.ai.api_key_set)
            .field("seller", &self.seller)
            .finish()
    }
}

/// A builder for creating `ListingClient` instances.
#[derive(Default)]
pub struct ListingClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    api_key_set: bool,
    seller: Option<SellerProfile>,
}

impl ListingClientBuilder {
    /// Creates a new `ListingClientBuilder`.
    ///
    /// # Examples
    ///
    /// ```
    /// use listing_gen::ListingClientBuilder;
    ///
    /// let client = ListingClientBuilder::new().build();
    /// assert!(!client.ai.is_available());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Records whether an API credential was configured.
    pub fn api_key_set(mut self, api_key_set: bool) -> Self {
        self.api_key_set = api_key_set;
        self
    }

    /// Sets the seller details used by the form-fill prompt.
    pub fn seller(mut self, seller: Option<SellerProfile>) -> Self {
        self.seller = seller;
        self
    }

    /// Builds the `ListingClient`.
    pub fn build(self) -> ListingClient {
        ListingClient {
            ai: AiClientConfig::new(self.ai_provider, self.api_key_set),
            seller: self.seller,
        }
    }
}

fn require_description(description: &str) -> Result<&str, ListingError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(ListingError::Validation(MISSING_DESCRIPTION.to_string()));
    }
    Ok(trimmed)
}

impl ListingClient {
    /// Extracts the structured listing fields from a free-text description.
    pub async fn generate_fields(&self, description: &str) -> Result<ListingFieldSet, ListingError> {
        let description = require_description(description)?;
        let provider = self.ai.ready_provider()?;

        let request = CompletionRequest {
            messages: vec![
                ChatMessage::system(TEXT_SYSTEM_PROMPT),
                ChatMessage::user(TEXT_USER_PROMPT.replace("{description}", description)),
            ],
            temperature: TEXT_TEMPERATURE,
            max_tokens: TEXT_MAX_TOKENS,
        };

        info!("[generate_fields] requesting listing fields from AI provider");
        let raw_response = provider.complete(&request).await?;
        debug!("<-- Listing fields from AI: {}", raw_response);

        let parsed = parse_completion_json(&raw_response)?;
        ListingFieldSet::from_value(&parsed)
    }

    /// Produces a free-form listing description for an uploaded product image.
    pub async fn describe_image(&self, upload: &ImageUpload) -> Result<String, ListingError> {
        let provider = self.ai.ready_provider()?;

        let request = CompletionRequest {
            messages: vec![
                ChatMessage::system(IMAGE_SYSTEM_PROMPT),
                ChatMessage::user_parts(vec![
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: upload.to_data_uri(),
                        },
                    },
                    ContentPart::Text {
                        text: IMAGE_USER_INSTRUCTION.to_string(),
                    },
                ]),
            ],
            temperature: IMAGE_TEMPERATURE,
            max_tokens: IMAGE_MAX_TOKENS,
        };

        info!(
            bytes = upload.bytes.len(),
            mime = upload.mime_type(),
            "[describe_image] requesting image description from AI provider"
        );
        let raw_response = provider.complete(&request).await?;
        debug!("<-- Image description from AI: {}", raw_response);

        Ok(raw_response.trim().to_string())
    }

    /// Generates values for the scanned fields of a listing form.
    pub async fn fill_form(
        &self,
        description: &str,
        form_fields: &[FormField],
    ) -> Result<Vec<FormFieldValue>, ListingError> {
        let description = require_description(description)?;
        if form_fields.is_empty() {
            return Err(ListingError::Validation(MISSING_FORM_FIELDS.to_string()));
        }
        let provider = self.ai.ready_provider()?;

        let prompt = build_form_prompt(description, form_fields, self.seller.as_ref())?;
        let request = CompletionRequest {
            messages: vec![ChatMessage::user(prompt)],
            temperature: FORM_TEMPERATURE,
            max_tokens: FORM_MAX_TOKENS,
        };

        info!(
            field_count = form_fields.len(),
            "[fill_form] requesting form values from AI provider"
        );
        let raw_response = provider.complete(&request).await?;
        debug!("<-- Form values from AI: {}", raw_response);

        let parsed = parse_completion_json(&raw_response)?;
        postprocess_form_fill(&parsed)
    }
}
