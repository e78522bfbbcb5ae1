//! # BTGOG LLM SDK
//!
//! A small LLM client library: a provider-agnostic [`client::LlmClient`]
//! trait and a Google Gemini client implementing it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use btgog_llm_sdk::gemini::{GeminiClient, GEMINI_3_FLASH};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::new("your-gemini-api-key")?;
//!     let response = client
//!         .message_builder()
//!         .model(GEMINI_3_FLASH)
//!         .system("Be professional, institutional, and direct.")
//!         .user_message("Hello, Gemini!")
//!         .send()
//!         .await?;
//!
//!     println!("Response: {}", response.text().unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod gemini;
pub mod models;
pub mod providers;
pub mod types;
