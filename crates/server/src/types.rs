use listing_gen::{FormFieldValue, ListingFieldSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Default)]
pub struct TextListingRequest {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FieldsResponse {
    pub success: bool,
    pub fields: ListingFieldSet,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImageResponse {
    pub success: bool,
    pub result: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormFillResponse {
    pub success: bool,
    pub fields: Vec<FormFieldValue>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub ai_available: bool,
    pub api_key_set: bool,
}
