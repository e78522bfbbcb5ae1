//! Gemini 3 Flash example with a system instruction
//!
//! Run with: GEMINI_API_KEY="..." cargo run --example gemini_flash

use btgog_llm_sdk::gemini::GeminiClient;
use btgog_llm_sdk::models::gemini::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("GEMINI_API_KEY")?;
    let client = GeminiClient::new(api_key)?;

    println!("=== Gemini 3 Flash Example ===\n");

    let response = client
        .message_builder()
        .model(GEMINI_3_FLASH)
        .system("You describe housing programs for public partners. Be brief.")
        .user_message("What does a workforce and trades campus provide?")
        .thinking_level("low")
        .max_output_tokens(512)
        .send()
        .await?;

    if let Some(model) = &response.model_version {
        println!("Model: {}", model);
    }
    println!("\nResponse:");
    println!("{}", response.text().unwrap_or_default());

    if let Some(usage) = response.usage_metadata {
        println!("\n=== Token Usage ===");
        println!("Prompt: {}", usage.prompt_token_count);
        println!("Response: {}", usage.candidates_token_count);
        println!("Total: {}", usage.total_token_count);
    }

    Ok(())
}
