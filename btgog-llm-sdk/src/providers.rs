//! Provider name constants

/// Google (Gemini models)
pub const GOOGLE: &str = "google";
