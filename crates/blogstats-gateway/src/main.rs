//! blogstats gateway
//!
//! - Beacon ingestion: POST /api/blog-event
//! - Admin summary:    GET  /api/blog-admin-stats?token=...
//! - Ops:              /healthz, /readyz, /metrics
//! - Graceful shutdown on Ctrl+C / SIGTERM

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use blogstats_core::error::{BlogStatsError, Result};
use blogstats_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "blogstats-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::var(config::CONFIG_PATH_ENV)
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file(&path)?;

    // validate() already checked this parses
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .map_err(|e| BlogStatsError::Config(format!("server.listen: {e}")))?;

    let state = AppState::from_config(cfg).await?;
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| BlogStatsError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "blogstats-gateway starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| BlogStatsError::Internal(format!("server failed: {e}")))?;

    tracing::info!("blogstats-gateway stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    state.set_draining();
    tracing::info!("signal received, starting graceful shutdown");
}
