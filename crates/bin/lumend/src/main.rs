//! # lumend — lumen daemon
//!
//! Composition root that wires the services together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise structured logging
//! - Construct the actuator and liveness services (the only shared state)
//! - Start the background liveness sweeper
//! - Build the axum router, injecting the services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use lumen_adapter_http_axum::state::AppState;
use lumen_app::ports::SystemClock;
use lumen_app::services::actuator_service::ActuatorService;
use lumen_app::services::liveness_service::LivenessService;
use lumen_app::sweeper::LivenessSweeper;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Services
    let actuator_service = Arc::new(ActuatorService::new());
    let liveness_service = Arc::new(LivenessService::new(
        config.heartbeat_timeout(),
        SystemClock,
    ));

    // Background sweep
    let sweeper = LivenessSweeper::start(Arc::clone(&liveness_service), config.sweep_interval());

    // HTTP
    let state = AppState::from_arcs(actuator_service, liveness_service);
    let app = lumen_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        %bind_addr,
        timeout_secs = config.liveness.timeout_secs,
        sweep_interval_secs = config.liveness.sweep_interval_secs,
        "lumend listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    tracing::info!("lumend stopped");

    Ok(())
}

/// Resolve when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
