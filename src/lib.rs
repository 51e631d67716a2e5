pub mod api;
pub mod care_log;
pub mod config;
pub mod core_state;
pub mod triage;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

pub use triage::{classify, export_report, ResponseBundle, TriageError, UrgencyTier};

/// Install the global tracing subscriber.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Start the HTTP shell and serve until Ctrl-C.
pub async fn run(server_config: config::ServerConfig) -> Result<(), api::ServerError> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let core = Arc::new(core_state::CoreState::new());
    let server = api::start_server(core, server_config.bind_addr).await?;
    tracing::info!(addr = %server.session.server_addr, "Listening");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }

    server.stop().await
}
