//! PCD bot HTTP server
//!
//! Main entry point for the LINE webhook server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::{ReplyService, WeatherService};
use infrastructure::{AppConfig, CwaWeatherAdapter, LineReplyAdapter, init_telemetry};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

const DEFAULT_LOG_FILTER: &str = "info,pcdbot_server=debug,presentation_http=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_telemetry(config.log_format, DEFAULT_LOG_FILTER)?;

    info!(version = env!("CARGO_PKG_VERSION"), "PCD bot server starting");
    info!(
        host = %config.server.host,
        port = %config.server.port,
        log_format = %config.log_format,
        "Configuration loaded"
    );

    for name in config.missing_credentials() {
        warn!(variable = name, "Credential not configured");
    }

    let weather = CwaWeatherAdapter::from_config(&config.weather)
        .context("Failed to initialize weather client")?;
    let replies =
        LineReplyAdapter::from_config(&config.line).context("Failed to initialize LINE client")?;

    let weather_service = WeatherService::new(Arc::new(weather));
    let reply_service = ReplyService::new(weather_service, Arc::new(replies));

    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    let state = AppState {
        reply_service: Arc::new(reply_service),
        config: Arc::new(config),
    };
    let app = routes::create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, "Accepting webhook deliveries");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server stopped");

    Ok(())
}

/// Resolve once the process is asked to stop, then arm the drain deadline
async fn shutdown_signal(drain_limit: Duration) {
    let signal_name = stop_requested().await;
    info!(signal = signal_name, ?drain_limit, "Stop requested, draining open requests");

    tokio::spawn(async move {
        tokio::time::sleep(drain_limit).await;
        warn!(?drain_limit, "Drain limit reached with requests still open, exiting");
        std::process::exit(0);
    });
}

/// Name of the first stop signal received
async fn stop_requested() -> &'static str {
    let interrupt = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Cannot listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            },
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    }
}
