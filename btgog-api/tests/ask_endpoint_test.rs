mod common;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use btgog_api::knowledge::{CONNECTION_FALLBACK, NO_DATA_FALLBACK};
use btgog_api::AnswerBridge;
use btgog_llm_sdk::error::LlmError;
use common::{
    create_completion_response_with_text, create_empty_completion_response, mock_bridge,
    setup_test_app,
};
use shared_types::{AskResponse, ErrorResponse, HealthResponse};

#[actix_rt::test]
async fn test_ask_returns_model_answer() -> anyhow::Result<()> {
    let (mock, bridge) = mock_bridge();
    mock.push_response(Ok(create_completion_response_with_text(
        "There are five specialized campuses.",
    )));
    let app = setup_test_app(bridge).await;

    let req = TestRequest::post()
        .uri("/api/ask")
        .set_json(serde_json::json!({"question": "How many campuses are there?"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: AskResponse = test::read_body_json(resp).await;
    assert_eq!(body.answer, "There are five specialized campuses.");
    assert_eq!(mock.get_call_count(), 1);

    let requests = mock.requests.lock().unwrap();
    assert_eq!(requests[0].model, "gemini-3-flash-preview");
    Ok(())
}

#[actix_rt::test]
async fn test_ask_service_failure_is_still_ok() -> anyhow::Result<()> {
    let (mock, bridge) = mock_bridge();
    mock.push_response(Err(LlmError::api_error(503, "overloaded".to_string())));
    let app = setup_test_app(bridge).await;

    let req = TestRequest::post()
        .uri("/api/ask")
        .set_json(serde_json::json!({"question": "What is BTGOG?"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: AskResponse = test::read_body_json(resp).await;
    assert_eq!(body.answer, CONNECTION_FALLBACK);
    Ok(())
}

#[actix_rt::test]
async fn test_ask_empty_answer_uses_no_data_fallback() -> anyhow::Result<()> {
    let (mock, bridge) = mock_bridge();
    mock.push_response(Ok(create_empty_completion_response()));
    let app = setup_test_app(bridge).await;

    let req = TestRequest::post()
        .uri("/api/ask")
        .set_json(serde_json::json!({"question": "What is BTGOG?"}))
        .to_request();
    let body: AskResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.answer, NO_DATA_FALLBACK);
    Ok(())
}

#[actix_rt::test]
async fn test_ask_blank_question_does_not_call_model() -> anyhow::Result<()> {
    let (mock, bridge) = mock_bridge();
    let app = setup_test_app(bridge).await;

    let req = TestRequest::post()
        .uri("/api/ask")
        .set_json(serde_json::json!({"question": "   "}))
        .to_request();
    let body: AskResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.answer, "");
    assert_eq!(mock.get_call_count(), 0);
    Ok(())
}

#[actix_rt::test]
async fn test_ask_malformed_body_is_bad_request() -> anyhow::Result<()> {
    let (mock, bridge) = mock_bridge();
    let app = setup_test_app(bridge).await;

    let req = TestRequest::post()
        .uri("/api/ask")
        .set_json(serde_json::json!({"query": "What is BTGOG?"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert!(!body.error.is_empty());
    assert_eq!(mock.get_call_count(), 0);
    Ok(())
}

#[actix_rt::test]
async fn test_health_reports_configuration() -> anyhow::Result<()> {
    let (_mock, bridge) = mock_bridge();
    let app = setup_test_app(bridge).await;

    let req = TestRequest::get().uri("/api/health").to_request();
    let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.status, "ok");
    assert_eq!(body.model, "gemini-3-flash-preview");
    assert!(body.credential_configured);
    Ok(())
}

#[actix_rt::test]
async fn test_unconfigured_bridge_answers_with_fallback() -> anyhow::Result<()> {
    let app = setup_test_app(AnswerBridge::unconfigured("gemini-3-flash-preview")).await;

    let req = TestRequest::get().uri("/api/health").to_request();
    let health: HealthResponse = test::call_and_read_body_json(&app, req).await;
    assert!(!health.credential_configured);

    let req = TestRequest::post()
        .uri("/api/ask")
        .set_json(serde_json::json!({"question": "What is BTGOG?"}))
        .to_request();
    let body: AskResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.answer, CONNECTION_FALLBACK);
    Ok(())
}
