use common::get_settings;
use config::{Config, Environment, File};
use dotenv::dotenv;
use server::{AppState, get_app};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn load_config() -> anyhow::Result<(String, u16)> {
    let settings = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::with_prefix("SERVER"))
        .build()?;

    let host: String = settings
        .get("host")
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = settings.get("port").unwrap_or(8000);

    Ok((host, port))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment and defaults still apply.
    dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    info!("Initializing chatbot server");

    match get_settings() {
        Ok(settings) => info!(
            "Loaded settings for {} {} (chatbot: {}, model: {})",
            settings.app_name, settings.app_version, settings.chatbot_name, settings.model_name
        ),
        Err(e) => warn!("Settings unavailable, /hello will answer with fallback values: {e}"),
    }

    let (host, port) = load_config()?;
    info!("Starting server on {}:{}", host, port);

    let app = get_app(Arc::new(AppState::default()));

    info!("Routes configured, binding to {}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    info!("Server started successfully, listening for requests");

    axum::serve(listener, app).await?;

    Ok(())
}
