//! Answer bridge between the website's question box and the language model.
//!
//! Every outcome is normalized into displayable text: the model's answer, or
//! one of the two fallback messages in [`crate::knowledge`]. Failures never
//! reach the caller.

use crate::config::GeminiConfig;
use crate::helpers::llm::{create_llm_client, resolve_api_key};
use crate::knowledge::{BTGOG_KNOWLEDGE_BASE, CONNECTION_FALLBACK, NO_DATA_FALLBACK};
use btgog_llm_sdk::client::LlmClient;
use btgog_llm_sdk::types::{CompletionRequest, Message};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct AnswerBridge {
    client: Option<Arc<dyn LlmClient>>,
    model: String,
    max_output_tokens: Option<u32>,
}

impl AnswerBridge {
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client: Some(client),
            model: model.into(),
            max_output_tokens: None,
        }
    }

    /// A bridge with no credential. Every question is answered with the
    /// connection fallback and no request is sent.
    pub fn unconfigured(model: impl Into<String>) -> Self {
        Self {
            client: None,
            model: model.into(),
            max_output_tokens: None,
        }
    }

    /// Build a Gemini-backed bridge. A missing or unusable credential leaves
    /// the bridge unconfigured rather than failing startup.
    pub fn from_config(config: &GeminiConfig) -> Self {
        let bridge = match resolve_api_key(config) {
            Some(api_key) => match create_llm_client(config, api_key) {
                Ok(client) => Self::new(client, &config.model),
                Err(e) => {
                    warn!(error = %e, "Failed to create Gemini client");
                    Self::unconfigured(&config.model)
                }
            },
            None => {
                warn!("No Gemini API key configured; questions will receive the fallback answer");
                Self::unconfigured(&config.model)
            }
        };

        bridge.with_max_output_tokens(config.max_output_tokens)
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: Option<u32>) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn build_request(&self, question: &str) -> CompletionRequest {
        CompletionRequest::new(&self.model)
            .with_system(BTGOG_KNOWLEDGE_BASE)
            .with_message(Message::user(question))
            .with_max_tokens(self.max_output_tokens)
    }

    /// Answer a visitor's question.
    ///
    /// Blank input returns an empty string without contacting the service.
    pub async fn answer_question(&self, question: &str) -> String {
        if question.trim().is_empty() {
            return String::new();
        }

        let Some(client) = &self.client else {
            warn!("Question received but no Gemini credential is configured");
            return CONNECTION_FALLBACK.to_string();
        };

        debug!(model = %self.model, question_len = question.len(), "Forwarding question");

        match client.complete(self.build_request(question)).await {
            Ok(response) => {
                let text = response.text();
                if text.is_empty() {
                    warn!(
                        stop_reason = ?response.stop_reason,
                        "Model returned no text; using fallback answer"
                    );
                    NO_DATA_FALLBACK.to_string()
                } else {
                    text
                }
            }
            Err(e) => {
                warn!(error = %e, "Question could not be answered; using fallback answer");
                CONNECTION_FALLBACK.to_string()
            }
        }
    }
}
