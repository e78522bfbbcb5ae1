use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use btgog_api::config::ApiConfig;
use btgog_api::{handlers, AnswerBridge};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "HTTP service answering questions from the BTGOG website", long_about = None)]
struct Args {
    /// Path to config file (defaults to ~/.config/btgog/api.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the configured bind port
    #[arg(short, long)]
    port: Option<u16>,
}

fn build_cors(config: &ApiConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_header(actix_web::http::header::CONTENT_TYPE)
        .max_age(3600);

    match &config.cors {
        Some(cors_config) => cors_config
            .allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
        None => cors,
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let (mut config, config_path) = match args.config {
        Some(path) => (ApiConfig::load_from(&path)?, path),
        None => ApiConfig::load()?,
    };
    info!("Loaded configuration from {}", config_path.display());

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let bridge = web::Data::new(AnswerBridge::from_config(&config.gemini));
    info!(
        model = %bridge.model(),
        credential_configured = bridge.is_configured(),
        "Answer bridge ready"
    );

    let bind_addr = config.bind_addr();
    info!("Starting btgog-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&config))
            .app_data(handlers::json_config())
            .app_data(bridge.clone())
            .service(handlers::ask::ask)
            .service(handlers::health::health)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
