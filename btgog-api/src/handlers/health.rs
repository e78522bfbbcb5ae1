use crate::bridge::AnswerBridge;
use actix_web::{get, web, HttpResponse, Responder};
use shared_types::HealthResponse;

#[get("/api/health")]
pub async fn health(bridge: web::Data<AnswerBridge>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        model: bridge.model().to_string(),
        credential_configured: bridge.is_configured(),
    })
}
