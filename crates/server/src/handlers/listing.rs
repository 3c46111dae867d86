//! # Listing Generation Handlers
//!
//! Text-to-fields extraction, image description, and form filling. Malformed
//! or missing bodies are not rejected by the extractors; they fall through
//! to the validation in `listing-gen` so every failure uses the same
//! `{"success": false, "error": ...}` envelope.

use super::{AppError, AppState};
use crate::types::{FieldsResponse, FormFillResponse, ImageResponse, TextListingRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use axum_extra::extract::{multipart::MultipartRejection, Multipart};
use listing_gen::{constants::MISSING_IMAGE, FormField, ImageUpload, ListingError};
use serde_json::Value;
use tracing::{debug, info};

/// The multipart part that carries the product photo.
pub const IMAGE_FIELD: &str = "image";

/// The handler for the `/generate-from-text` endpoint.
pub async fn generate_from_text_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<TextListingRequest>, JsonRejection>,
) -> Result<Json<FieldsResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("Unreadable text listing body: {rejection}");
            TextListingRequest::default()
        }
    };
    let description = request.description.unwrap_or_default();
    info!(
        chars = description.chars().count(),
        "Received text listing request"
    );

    let fields = app_state.listing.generate_fields(&description).await?;

    Ok(Json(FieldsResponse {
        success: true,
        fields,
    }))
}

/// The handler for the `/generate` endpoint, which accepts a multipart upload
/// with the photo in the `image` part.
pub async fn generate_from_image_handler(
    State(app_state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageResponse>, AppError> {
    let upload = match multipart {
        Ok(mut multipart) => read_image_part(&mut multipart).await?,
        Err(rejection) => {
            debug!("Request is not a multipart upload: {rejection}");
            None
        }
    };
    let upload = upload.ok_or_else(|| ListingError::Validation(MISSING_IMAGE.to_string()))?;
    info!(
        bytes = upload.bytes.len(),
        mime = upload.mime_type(),
        "Received image listing request"
    );

    let result = app_state.listing.describe_image(&upload).await?;

    Ok(Json(ImageResponse {
        success: true,
        result,
    }))
}

/// Returns the first file part named `image`, skipping everything else.
async fn read_image_part(multipart: &mut Multipart) -> Result<Option<ImageUpload>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(anyhow::Error::from)? {
        if field.name() != Some(IMAGE_FIELD) || field.file_name().is_none() {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(anyhow::Error::from)?;
        return Ok(Some(ImageUpload {
            bytes: bytes.to_vec(),
            content_type,
        }));
    }
    Ok(None)
}

/// The handler for the `/generate-from-form` endpoint.
///
/// Expects `{"description": "...", "formFields": [...]}`. Entries of
/// `formFields` that are not objects are ignored.
pub async fn generate_from_form_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<FormFillResponse>, AppError> {
    let payload = match payload {
        Ok(Json(value)) => value,
        Err(rejection) => {
            debug!("Unreadable form listing body: {rejection}");
            Value::Null
        }
    };

    let description = payload
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let form_fields: Vec<FormField> = payload
        .get("formFields")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter(|item| item.is_object())
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default();
    info!(
        field_count = form_fields.len(),
        "Received form listing request"
    );

    let fields = app_state
        .listing
        .fill_form(description, &form_fields)
        .await?;

    Ok(Json(FormFillResponse {
        success: true,
        count: fields.len(),
        fields,
    }))
}
