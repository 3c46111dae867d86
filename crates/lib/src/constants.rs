//! # Shared Constants
//!
//! Error messages that are part of the HTTP contract. The browser extension
//! matches on some of them, so they must not drift.

pub const MISSING_DESCRIPTION: &str = "Missing 'description' in request body";
pub const MISSING_IMAGE: &str = "No image file provided";
pub const MISSING_FORM_FIELDS: &str = "Missing 'formFields' array in request body";

pub const AI_UNAVAILABLE: &str = "AI provider is not available on server";
pub const API_KEY_MISSING: &str = "OPENAI_API_KEY not set on server";
