//! # Prompt Template Modules
//!
//! This module organizes the prompt templates sent to the AI provider.
//! It is divided into sub-modules based on the endpoint that uses them.

pub mod form;
pub mod listing;
