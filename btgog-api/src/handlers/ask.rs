use crate::bridge::AnswerBridge;
use actix_web::{post, web, HttpResponse, Responder};
use shared_types::{AskRequest, AskResponse};
use tracing::info;

#[post("/api/ask")]
pub async fn ask(req: web::Json<AskRequest>, bridge: web::Data<AnswerBridge>) -> impl Responder {
    info!(question_len = req.question.len(), "Answering question");

    let answer = bridge.answer_question(&req.question).await;

    HttpResponse::Ok().json(AskResponse { answer })
}
