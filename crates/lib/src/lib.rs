//! # Listing Generation
//!
//! This crate turns product descriptions and product photos into e-commerce
//! listing data with the help of a chat-completion AI provider. It composes
//! the prompts, calls the provider through the `AiProvider` trait, and
//! normalizes the reply: code fences are stripped and the parsed JSON is
//! coerced into a fixed, always-complete set of string fields.

pub mod client;
pub mod constants;
pub mod errors;
pub mod fence;
pub mod fields;
pub mod form;
pub mod image;
pub mod prompts;
pub mod providers;
pub mod types;

pub use client::{AiClientConfig, ListingClient, ListingClientBuilder};
pub use errors::ListingError;
pub use fields::{ListingFieldSet, FIELD_KEYS};
pub use types::{FormField, FormFieldValue, ImageUpload, SellerProfile};
