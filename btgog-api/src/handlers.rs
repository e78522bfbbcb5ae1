pub mod ask;
pub mod health;

use actix_web::{error::InternalError, web, HttpResponse};
use shared_types::ErrorResponse;

/// JSON extractor config that reports malformed bodies as `ErrorResponse`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest().json(ErrorResponse {
                error: err.to_string(),
            });
            InternalError::from_response(err, response).into()
        })
}
