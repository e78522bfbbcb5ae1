use super::client::GeminiClient;
use super::types::*;
use crate::error::LlmError;

pub struct MessageBuilder<'a> {
    client: &'a GeminiClient,
    model: Option<String>,
    contents: Vec<GeminiContent>,
    system_instruction: Option<String>,
    generation_config: GenerationConfig,
}

impl<'a> MessageBuilder<'a> {
    pub fn new(client: &'a GeminiClient) -> Self {
        Self {
            client,
            model: None,
            contents: Vec::new(),
            system_instruction: None,
            generation_config: GenerationConfig::default(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn user_message(mut self, text: impl Into<String>) -> Self {
        self.contents.push(GeminiContent {
            role: GeminiRole::User,
            parts: vec![GeminiPart::text(text)],
        });
        self
    }

    pub fn model_message(mut self, text: impl Into<String>) -> Self {
        self.contents.push(GeminiContent {
            role: GeminiRole::Model,
            parts: vec![GeminiPart::text(text)],
        });
        self
    }

    pub fn system(mut self, text: impl Into<String>) -> Self {
        self.system_instruction = Some(text.into());
        self
    }

    pub fn thinking_level(mut self, level: impl Into<String>) -> Self {
        self.generation_config.thinking_config = Some(ThinkingConfig {
            thinking_level: level.into(),
        });
        self
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.generation_config.temperature = Some(temp);
        self
    }

    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.generation_config.max_output_tokens = Some(tokens);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.generation_config.top_p = Some(top_p);
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.generation_config.top_k = Some(top_k);
        self
    }

    pub fn build(self) -> Result<(String, GeminiGenerateContentRequest), LlmError> {
        let model = self
            .model
            .ok_or_else(|| LlmError::invalid_request("Model is required"))?;

        if self.contents.is_empty() {
            return Err(LlmError::invalid_request(
                "At least one message is required",
            ));
        }

        let request = GeminiGenerateContentRequest {
            contents: self.contents,
            system_instruction: self.system_instruction.map(|text| GeminiContent {
                role: GeminiRole::User,
                parts: vec![GeminiPart::text(text)],
            }),
            generation_config: self.generation_config.into_option(),
        };

        Ok((model, request))
    }

    pub async fn send(self) -> Result<GeminiGenerateContentResponse, LlmError> {
        let client = self.client;
        let (model, request) = self.build()?;
        client.generate_content(model, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_model() {
        let client = GeminiClient::new("test-key").unwrap();
        let result = client.message_builder().user_message("Hello").build();
        assert!(matches!(result, Err(LlmError::InvalidRequest { .. })));
    }

    #[test]
    fn test_build_requires_contents() {
        let client = GeminiClient::new("test-key").unwrap();
        let result = client
            .message_builder()
            .model("gemini-3-flash-preview")
            .system("Be direct.")
            .build();
        assert!(matches!(result, Err(LlmError::InvalidRequest { .. })));
    }

    #[test]
    fn test_build_with_system_and_config() {
        let client = GeminiClient::new("test-key").unwrap();
        let (model, request) = client
            .message_builder()
            .model("gemini-3-flash-preview")
            .system("Be professional, institutional, and direct.")
            .user_message("What is BTGOG?")
            .model_message("A housing initiative.")
            .user_message("How many campuses?")
            .temperature(0.2)
            .top_k(40)
            .build()
            .unwrap();

        assert_eq!(model, "gemini-3-flash-preview");
        assert_eq!(request.contents.len(), 3);
        assert_eq!(request.contents[1].role, GeminiRole::Model);
        let system = request.system_instruction.unwrap();
        assert_eq!(
            system.parts[0].text.as_deref(),
            Some("Be professional, institutional, and direct.")
        );
        let config = request.generation_config.unwrap();
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.top_k, Some(40));
    }
}
