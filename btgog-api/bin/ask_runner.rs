use btgog_api::config::ApiConfig;
use btgog_api::AnswerBridge;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Ask the BTGOG answer bridge a single question", long_about = None)]
struct Args {
    /// Question to ask
    #[arg(short, long)]
    question: String,

    /// Path to config file containing the Gemini settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_target(false),
        )
        .init();

    let args = Args::parse();

    let config = match args.config {
        Some(path) => ApiConfig::load_from(&path)?,
        None => ApiConfig::load()?.0,
    };

    let bridge = AnswerBridge::from_config(&config.gemini);
    let answer = bridge.answer_question(args.question.trim()).await;

    println!("{}", answer);
    Ok(())
}
