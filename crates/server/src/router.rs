use super::{handlers, state::AppState};
use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, request::Parts, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Upper bound for the multipart image upload.
pub const MAX_IMAGE_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config.cors_origins);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route(
            "/generate-from-text",
            post(handlers::generate_from_text_handler),
        )
        .route(
            "/generate",
            post(handlers::generate_from_image_handler)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_UPLOAD_BYTES)),
        )
        .route(
            "/generate-from-form",
            post(handlers::generate_from_form_handler),
        )
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS policy from the configured origin patterns.
pub fn cors_layer(patterns: &[String]) -> CorsLayer {
    let patterns = patterns.to_vec();
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .is_ok_and(|origin| origin_allowed(&patterns, origin))
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

/// Matches an origin against the patterns. A pattern ending in `*` matches
/// any origin that starts with the rest of the pattern; anything else must
/// match exactly.
pub fn origin_allowed(patterns: &[String], origin: &str) -> bool {
    patterns.iter().any(|pattern| match pattern.strip_suffix('*') {
        Some(prefix) => origin.starts_with(prefix),
        None => origin == pattern,
    })
}
