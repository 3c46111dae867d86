//! Inline image encoding for multimodal completion requests.

use crate::types::ImageUpload;
use base64::{engine::general_purpose, Engine as _};

/// The MIME type assumed when the uploader did not declare one.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

impl ImageUpload {
    /// The declared content type, or `image/jpeg` when none (or a blank one) was given.
    pub fn mime_type(&self) -> &str {
        self.content_type
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_IMAGE_MIME)
    }

    /// Encodes the upload as `data:<mime>;base64,<payload>`.
    pub fn to_data_uri(&self) -> String {
        let payload = general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.mime_type(), payload)
    }
}

/// Splits a base64 data URI into its MIME type and payload.
///
/// Returns `None` for anything that is not a `data:<mime>;base64,<payload>` URI.
pub fn split_data_uri(uri: &str) -> Option<(&str, &str)> {
    let rest = uri.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let mime = meta.strip_suffix(";base64")?;
    Some((mime, payload))
}
