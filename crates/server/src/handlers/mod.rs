//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `listing-gen-server`.

pub mod general;
pub mod listing;

// Re-export all handlers so the router can reach them under `handlers::`.
pub use general::*;
pub use listing::*;

// Shared items used by multiple handler modules.
use super::{errors::AppError, state::AppState};
