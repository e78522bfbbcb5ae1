use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Question submitted from the website's question box
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AskRequest {
    pub question: String,
}

/// Text shown in the answer region: the model's answer or a fallback message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub credential_configured: bool,
}
