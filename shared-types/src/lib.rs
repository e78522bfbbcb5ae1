use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod ask;
pub mod typescript_gen;

pub use ask::{AskRequest, AskResponse, HealthResponse};
pub use typescript_gen::generate_typescript_definitions;

// Shared models for the BTGOG ask service and the website

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}
