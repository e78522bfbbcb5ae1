#![allow(dead_code)]

use actix_web::{test, web, App};
use async_trait::async_trait;
use btgog_api::{handlers, AnswerBridge};
use btgog_llm_sdk::client::LlmClient;
use btgog_llm_sdk::error::LlmError;
use btgog_llm_sdk::types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage};
use std::sync::{Arc, Mutex};

pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<Result<CompletionResponse, LlmError>>>>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        MockLlmClient {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push_response(&self, response: Result<CompletionResponse, LlmError>) {
        self.responses.lock().unwrap().push(response);
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request);

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(create_completion_response_with_text(
                "BTGOG is a systems-based initiative...",
            ))
        } else {
            responses.remove(0)
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

pub fn create_completion_response_with_text(text: &str) -> CompletionResponse {
    CompletionResponse {
        content: vec![ContentBlock::Text {
            text: text.to_string(),
        }],
        role: Role::Assistant,
        usage: Usage {
            input_tokens: 10,
            output_tokens: 20,
        },
        stop_reason: Some("STOP".to_string()),
    }
}

pub fn create_empty_completion_response() -> CompletionResponse {
    CompletionResponse {
        content: vec![],
        role: Role::Assistant,
        usage: Usage::default(),
        stop_reason: Some("SAFETY".to_string()),
    }
}

pub async fn setup_test_app(
    bridge: AnswerBridge,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(handlers::json_config())
            .app_data(web::Data::new(bridge))
            .service(handlers::ask::ask)
            .service(handlers::health::health),
    )
    .await
}

pub fn mock_bridge() -> (Arc<MockLlmClient>, AnswerBridge) {
    let mock = Arc::new(MockLlmClient::new());
    let bridge = AnswerBridge::new(mock.clone() as Arc<dyn LlmClient>, "gemini-3-flash-preview");
    (mock, bridge)
}
