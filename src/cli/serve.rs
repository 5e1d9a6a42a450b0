use anyhow::Result;
use saiyana_notification::EmailService;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::routes::{self, AppState};

/// Start the web server
pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting saiyana server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let email = if config.email.is_configured() {
        Some(EmailService::new(&config.email)?)
    } else {
        tracing::warn!("Email delivery not configured; contact submissions will be rejected");
        None
    };

    let state = AppState { config, email };
    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
