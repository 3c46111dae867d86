use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use listing_gen::ListingError;
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// Every variant is rendered as the `{"success": false, "error": ...}`
/// envelope the listing endpoints share.
#[derive(Debug)]
pub enum AppError {
    /// Errors originating from `listing-gen`.
    Listing(ListingError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<ListingError> for AppError {
    fn from(err: ListingError) -> Self {
        AppError::Listing(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Listing(err) if err.is_client_error() => {
                warn!("Rejected request: {err}");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::Listing(err) => {
                error!("ListingError: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(json!({
            "success": false,
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
