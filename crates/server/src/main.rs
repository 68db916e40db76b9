use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kitchen_core::{load_config, load_config_from_env, validate_config, Config, KitchenService};
use kitchen_server::{api::create_router, state::AppState};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file used when `DONUT_CONFIG` is not set
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    init_logging();
    info!("Starting donut shop v{}", VERSION);

    let config = resolve_config()?;
    validate_config(&config).context("Configuration validation failed")?;

    info!(
        "Kitchen delays: acknowledge={}ms prep={}ms fry={}ms",
        config.kitchen.acknowledge_delay_ms,
        config.kitchen.prep_delay_ms,
        config.kitchen.fry_delay_ms
    );

    let kitchen = Arc::new(KitchenService::new(config.kitchen.clone()));
    info!("Kitchen started");

    let state = Arc::new(AppState::new(config.clone(), Arc::clone(&kitchen)));
    let app = create_router(state);

    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down...");
    kitchen.stop();

    Ok(())
}

/// Initialize logging (`DONUT_LOG_FORMAT=json` switches to JSON lines)
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    let json = std::env::var("DONUT_LOG_FORMAT").is_ok_and(|format| format == "json");

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Load the config named by `DONUT_CONFIG`, else `config.toml` if present,
/// else built-in defaults. `DONUT_*` environment overrides apply in all cases.
fn resolve_config() -> Result<Config> {
    let (config_path, explicit) = match std::env::var("DONUT_CONFIG") {
        Ok(path) => (PathBuf::from(path), true),
        Err(_) => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };

    if !explicit && !config_path.exists() {
        info!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
        return load_config_from_env().context("Failed to read configuration from environment");
    }

    info!("Loading configuration from {:?}", config_path);
    load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
