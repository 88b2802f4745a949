//! Telemetry mirror server.
//!
//! Serves canned connection, field, and metric payloads until Ctrl-C or
//! SIGTERM. Without a `mirror.yaml` in the working directory the server
//! listens on the fixed `127.0.0.1:7007` and logs at `info`; the file and
//! `RUST_LOG` only move the listener and the log filter, never the payloads.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use mirror_core::error::{MirrorError, Result};
use mirror_server::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    let cfg = match config::load_or_default(config::DEFAULT_CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config load failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log.filter));
    fmt().with_env_filter(filter).init();

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "mirror-server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: config::MirrorConfig) -> Result<()> {
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| MirrorError::Internal(format!("failed to bind {listen}: {e}")))?;

    tracing::info!(%listen, "mirror-server listening, press CTRL-C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MirrorError::Internal(format!("server failed: {e}")))?;

    tracing::info!("mirror-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
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

    tracing::info!("shutdown signal received");
}
