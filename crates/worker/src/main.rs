use std::net::SocketAddr;
use std::time::Duration;

use herald_clients::PlatformClients;
use herald_dispatch::Catalog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use herald_worker::catalog::load_catalog;
use herald_worker::config::WorkerConfig;
use herald_worker::routes;
use herald_worker::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = WorkerConfig::from_env();

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "herald_worker=info,herald_dispatch=info,tower_http=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(host = %config.host, port = %config.port, "Loaded worker configuration");

    // --- Message templates ---
    let catalog = match &config.messages_file {
        Some(path) => load_catalog(path).expect("Failed to load message overrides"),
        None => Catalog::new(),
    };

    // --- Platform clients ---
    let clients =
        PlatformClients::from_config(&config.clients).expect("Failed to build HTTP clients");
    tracing::info!(
        ttl_secs = config.tenant_cache_ttl_secs,
        default_locale = %config.default_locale,
        "Dispatch engine ready"
    );

    // --- Router ---
    let state = AppState::build(clients, &config, catalog);
    let app = routes::app(state, Duration::from_secs(config.request_timeout_secs));

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or, on Unix, SIGTERM.
///
/// In-flight dispatches finish before the process exits; the bus redelivers
/// anything it never got an answer for.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
