// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use axum::{ServiceExt, extract::Request};
use config::{Args, SwapServiceConfig};
use server::{
    app::create_app,
    logging::{self, LoggingConfig},
    metrics,
    state::AppState,
};

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let config = SwapServiceConfig::load(&args.env_file).context("Failed to load configuration")?;

    let loki_url = config.metrics.loki_url();
    let _log_guard = logging::init_with_config(LoggingConfig::from_config(
        &config.log,
        loki_url.as_deref(),
    ))?;

    if config.metrics.enabled {
        metrics::init(&config.metrics.prometheus_prefix)?;
        tracing::info!(prefix = %config.metrics.prometheus_prefix, "Metrics enabled");
    }

    let bind_host: IpAddr = config
        .express
        .bind_host
        .parse()
        .with_context(|| format!("Invalid bind host '{}'", config.express.bind_host))?;
    let addr = SocketAddr::new(bind_host, config.express.port);

    tracing::info!("Starting swapservice-rest v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Store: {}", config.module.store_name);
    tracing::info!("Node URL: {}", config.node.url);
    tracing::info!("Log level: {}", config.log.level);

    let state = AppState::new(config)?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
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

    tracing::info!("Shutdown signal received");
}
