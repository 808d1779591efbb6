use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod routing;
mod state;

use config::{Config, ConfigError};
use state::GlobalState;

static DEFAULTCONFIG: &str = "settings.toml";

#[tokio::main]
async fn main() -> Result<(), ConfigError>
{
    let config_path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULTCONFIG));
    let (config, found) = Config::read(&config_path)?;

    init_logging(&config);

    if !found {
        tracing::warn!(path = %config_path.display(), "Config file not found, using defaults");
    }

    let addr = config.bind_addr()?;
    let gstate = Arc::new(GlobalState::new(config));

    tracing::info!(
        templates = ?gstate.handler.renderer.template_names(),
        http_root = %gstate.link_config.http_root,
        "Templates registered"
    );

    let app = routing::get_all_routes(gstate);

    tracing::info!(%addr, "Art Finder listening");

    if let Err(error) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(%error, "Server stopped with an error");
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// RUST_LOG wins over whatever the config says
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "Couldn't listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => { signal.recv().await; },
            Err(error) => {
                tracing::error!(%error, "Couldn't listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
