use bfhl_service::config::BfhlConfig;
use bfhl_service::startup::Application;
use secrecy::ExposeSecret;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = BfhlConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        "bfhl-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );

    // Missing values are tolerated; they surface in responses instead.
    match &config.official_email {
        Some(email) => tracing::info!(official_email = %email, "Loaded operator email"),
        None => tracing::warn!("OFFICIAL_EMAIL is not set; responses will omit official_email"),
    }
    if config.groq.api_key.expose_secret().is_empty() {
        tracing::warn!("GROQ_API_KEY is not set; AI requests will answer AI_error");
    } else {
        tracing::info!("Loaded Groq API key");
    }

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
