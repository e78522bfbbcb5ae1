pub mod bridge;
pub mod config;
pub mod handlers;
pub mod helpers;
pub mod knowledge;

pub use bridge::AnswerBridge;
