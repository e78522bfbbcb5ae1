//! Google Gemini API client and types
//!
//! Supports Gemini 3 Pro and Gemini 3 Flash through the `generateContent` endpoint.

pub mod builder;
pub mod client;
pub mod types;

pub use builder::MessageBuilder;
pub use client::GeminiClient;
pub use types::*;

pub use crate::models::gemini::*;
